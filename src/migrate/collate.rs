//! Collation of source issue comments into a single text block.

use crate::editor::Editor;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::remote::RemoteComment;
use crate::scan::scan_for_internal;

/// Walk the source comments, letting the operator pick which ones to keep,
/// then hand the aggregate to the editor for a final manual revision.
///
/// The aggregate goes through the editor even when no comment was kept; the
/// caller decides what to do with an empty result.
pub fn collate_comments<P: Prompter, E: Editor>(
    prompt: &P,
    editor: &E,
    comments: &[RemoteComment],
) -> Result<String> {
    let mut collated = String::new();

    for comment in comments {
        let flagged = scan_for_internal(&comment.body);
        if flagged {
            println!("\nAlert! Internal terms found in comment.");
        }
        println!("\nComment: {}", comment.body);

        let label = if flagged {
            "Comment Alert! Internal terms found in comment. Please be sure to edit"
        } else {
            "Add Comment"
        };
        if !prompt.confirm(label)? {
            continue;
        }

        collated.push_str(&format!(
            "\nContext from {}\nUser: {}\n{}\n",
            comment.created_at, comment.author, comment.body
        ));
    }

    editor.edit("collate", &collated)
}
