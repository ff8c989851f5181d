//! Interactive assembly of the outbound issue payload.

use crate::editor::Editor;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::remote::{NewIssue, RemoteComment, RemoteIssue};
use crate::scan::scan_for_internal;

use super::collate::collate_comments;
use super::labels::sync_labels;

/// Header prepended to collated comment text in the destination body.
const COLLATED_HEADER: &str = "\n### Collated Context\n";

/// Build the outbound issue request for `issue`.
///
/// Four decision steps, each independent and skippable: edit title, edit
/// body, sync labels, collate comments. Any prompt or editor failure aborts
/// the whole build.
pub fn build_request<P: Prompter, E: Editor>(
    prompt: &P,
    editor: &E,
    issue: &RemoteIssue,
    comments: &[RemoteComment],
    imported_label: &str,
) -> Result<NewIssue> {
    let mut request = NewIssue {
        title: issue.title.clone(),
        body: issue.body.clone(),
        labels: Vec::new(),
    };

    let title_label = if scan_for_internal(&issue.title) {
        "Issue Title Alert! Internal terms found in title. Please be sure to edit"
    } else {
        "Edit Title"
    };
    if prompt.confirm(title_label)? {
        request.title = prompt.ask_text("Update Title", &issue.title)?;
    }

    let body_label = if scan_for_internal(&issue.body) {
        "Issue Body Alert! Internal terms found in body. Please be sure to edit"
    } else {
        "Edit Body"
    };
    if prompt.confirm(body_label)? {
        request.body = editor.edit("body", &request.body)?;
    }

    if prompt.confirm("Sync Labels")? {
        request.labels = sync_labels(&issue.labels, imported_label);
    }

    if prompt.confirm("Collate Comments")? {
        let collated = collate_comments(prompt, editor, comments)?;
        if !collated.is_empty() {
            request.body.push_str(COLLATED_HEADER);
            request.body.push_str(&collated);
        }
    }

    Ok(request)
}
