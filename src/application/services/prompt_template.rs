/// Fixed analysis prompt. The transcript is embedded verbatim between tags.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Based on the following meeting transcript, produce a structured analysis with three clearly \
labeled sections: \"Executive Summary\", \"Action Items\" (include the assigned person if one is \
mentioned) and \"Key Decisions\". If a section has no content, say so explicitly.

Here is the transcript:
<transcript>
{}
</transcript>",
        transcript
    )
}
