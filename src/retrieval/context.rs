//! Prompt context assembly from retrieval matches.

use super::SimilarityMatch;

const HEADER: &str = "Here are relevant WinCC JavaScript examples:\n\n";

/// Render ranked matches into the example block fed to the model.
///
/// Each match becomes a numbered block with title, category, description,
/// and the full code body. Anything past `max_chars` is cut at a char
/// boundary and marked with an ellipsis; the cut may land mid-statement,
/// which the model tolerates better than an oversized prompt.
pub fn build_context(matches: &[SimilarityMatch], max_chars: usize) -> String {
    let mut context = String::from(HEADER);

    for (i, m) in matches.iter().enumerate() {
        let template = &m.template;
        context.push_str(&format!(
            "Example {}: {} ({})\nDescription: {}\nCode:\n{}\n\n",
            i + 1,
            template.title,
            template.category,
            template.description,
            template.code
        ));
    }

    if context.len() > max_chars {
        // Find a clean char boundary
        let end = context
            .char_indices()
            .take_while(|(i, _)| *i < max_chars)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(max_chars);
        context = format!("{}...\n\n", &context[..end]);
    }

    context
}
