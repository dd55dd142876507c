// Instruction prefixes for every research operation.
// Clients address these by key, so keys and wording are a fixed contract.
// Each prefix ends with a blank line; the submitted content follows directly.

use serde::Serialize;

/// Grouping shown to clients when they list available operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Text Editing")]
    TextEditing,
    #[serde(rename = "Text Analysis")]
    TextAnalysis,
    #[serde(rename = "Grammar Tools")]
    GrammarTools,
    #[serde(rename = "Technical")]
    Technical,
    #[serde(rename = "Translation")]
    Translation,
    #[serde(rename = "AI Insights")]
    AiInsights,
}

use Category::*;

/// `(operation key, category, instruction prefix)`
pub const OPERATION_TEMPLATES: &[(&str, Category, &str)] = &[
    // Text editing
    (
        "rewrite",
        TextEditing,
        "Rewrite the following text to improve clarity and grammar in a simple way:\n\n",
    ),
    (
        "expand",
        TextEditing,
        "Expand the following text into a more detailed explanation or article:\n\n",
    ),
    (
        "shorten",
        TextEditing,
        "Shorten the following text while keeping the core message intact:\n\n",
    ),
    (
        "tone_change",
        TextEditing,
        "Change the tone of the following text as specified:\n\n",
    ),
    // Text analysis
    (
        "summarize",
        TextAnalysis,
        "Provide a clear and concise summary of the following text in a few sentences:\n\n",
    ),
    (
        "summarize_bullets",
        TextAnalysis,
        "Summarize the following content into concise bullet points:\n\n",
    ),
    (
        "extract_keywords",
        TextAnalysis,
        "Extract important keywords from the following text:\n\n",
    ),
    (
        "generate_outline",
        TextAnalysis,
        "Create a structured outline for an article based on the following topic or content:\n\n",
    ),
    (
        "generate_title",
        TextAnalysis,
        "Generate a compelling title for the following content:\n\n",
    ),
    (
        "question",
        TextAnalysis,
        "Generate insightful questions based on the following text:\n\n",
    ),
    // Grammar
    (
        "check_grammar",
        GrammarTools,
        "Correct any grammatical mistakes in the following text:\n\n",
    ),
    (
        "synonyms",
        GrammarTools,
        "Provide synonyms for key words and phrases in the following text:\n\n",
    ),
    (
        "antonyms",
        GrammarTools,
        "Provide antonyms for key words and phrases in the following text:\n\n",
    ),
    (
        "paraphrase",
        GrammarTools,
        "Paraphrase the following text while preserving its original meaning:\n\n",
    ),
    (
        "correct_punctuation",
        GrammarTools,
        "Correct the punctuation in the following text:\n\n",
    ),
    (
        "simplify_text",
        GrammarTools,
        "Simplify the following text to make it more accessible:\n\n",
    ),
    (
        "expand_phrases",
        GrammarTools,
        "Expand the following phrases into full sentences or explanations:\n\n",
    ),
    (
        "verb_conjugation",
        GrammarTools,
        "Provide verb conjugations for verbs in the following text:\n\n",
    ),
    // Technical
    (
        "suggest",
        Technical,
        "Based on the following content, suggest related topics and further reading. Format with headings and bullet points:\n\n",
    ),
    (
        "code_explain",
        Technical,
        "Explain the following code snippet in simple terms:\n\n",
    ),
    // Key spelling is what deployed clients send.
    (
        "quary_explain",
        Technical,
        "Explain the following database query in plain language:\n\n",
    ),
    (
        "code_comment",
        Technical,
        "Add clear comments to the following code snippet:\n\n",
    ),
    (
        "code_debug",
        Technical,
        "Identify and fix errors in the following code snippet:\n\n",
    ),
    (
        "convert_to_pseudocode",
        Technical,
        "Convert the following code into readable pseudocode:\n\n",
    ),
    (
        "complexity_analysis",
        Technical,
        "Analyze the time and space complexity of the following algorithm:\n\n",
    ),
    (
        "generate_test_cases",
        Technical,
        "Generate test cases for the following function or code snippet:\n\n",
    ),
    (
        "real_application",
        Technical,
        "Describe real-world applications of the following concept or code:\n\n",
    ),
    // Translation
    (
        "translate_bengali",
        Translation,
        "Translate the following text into Bengali:\n\n",
    ),
    (
        "translate_hindi",
        Translation,
        "Translate the following text into Hindi:\n\n",
    ),
    (
        "translate_english",
        Translation,
        "Translate the following text into English:\n\n",
    ),
    (
        "translate_other",
        Translation,
        "Translate the following text into the specified target language:\n\n",
    ),
    // AI insights
    (
        "sentiment_analysis",
        AiInsights,
        "Analyze the sentiment of the following text (positive, negative, or neutral):\n\n",
    ),
    (
        "readability_score",
        AiInsights,
        "Calculate the readability score (e.g., Flesch–Kincaid) of the following text:\n\n",
    ),
    (
        "detect_language",
        AiInsights,
        "Detect the language of the following text:\n\n",
    ),
    (
        "keyword_density",
        AiInsights,
        "Calculate the keyword density for key terms in the following text:\n\n",
    ),
];
