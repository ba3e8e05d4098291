//! Prompt construction for the pro/con analysis.
//!
//! Both the system instruction and the user prompt are pure functions of their
//! inputs, so the same topic and language always produce the same request.

use crate::domain::Language;

/// Pins every model output to `language`.
pub fn build_system_instruction(language: Language) -> String {
    format!(
        "You are an intelligent assistant. Your primary task is to generate a pro/con list \
for any given topic. All of your output, without exception, must be in this language: {}.",
        language.display_name()
    )
}

/// Asks for exactly one JSON object describing the topic.
pub fn build_analysis_prompt(topic: &str) -> String {
    format!(
        r#"Analyze this topic: "{topic}".
Your entire response must be a single valid JSON object, with no extra text or markdown.
The JSON structure must be:
{{
  "isProduct": <boolean>,
  "productSearchTerm": "<string>",
  "pros": ["<string>", "..."],
  "cons": ["<string>", "..."],
  "priceComparisons": [
    {{"store": "<Store Name>", "price": "<Price (string)>"}},
    ...
  ]
}}
- "isProduct": true if the topic is a purchasable product, otherwise false.
- "productSearchTerm": If isProduct is true, provide a clear product name. Otherwise, an empty string.
- "pros": An array of strings with the product's advantages.
- "cons": An array of strings with the product's disadvantages.
- "priceComparisons": If isProduct is true, provide 3 sample price comparisons from relevant online stores. If it's not a product, provide an empty array []."#,
        topic = topic.trim()
    )
}
