//! Prompt templates for the tutoring protocol, quiz, and revision sheet

use crate::types::chat::{format_history, ChatTurn};
use crate::types::chunk::join_chunks;
use crate::types::Chunk;

/// Fixed-form opening of the offer to search the web. The consent gate
/// matches on this prefix, so the wording must stay stable.
pub const EXTERNAL_OFFER_PREFIX: &str = "I'm sorry, I could not find this information in the course";

/// The fixed offer presented when internal retrieval is insufficient.
pub fn external_offer(course_label: &str) -> String {
    format!(
        "{} '{}'. Would you like me to search the internet for you?",
        EXTERNAL_OFFER_PREFIX, course_label
    )
}

/// Prompt builder for the tutoring assistant
pub struct PromptBuilder;

impl PromptBuilder {
    /// System instruction rendered for answer composition. Restates the
    /// tutoring posture and the tool protocol so the model's text follows
    /// the same rules the router enforces in code.
    pub fn tutor_system_prompt(course_label: &str) -> String {
        format!(
            r#"You are Polly, a strict pedagogical assistant for a political-science course ({course}). Mention this name if the user asks which course you cover.

PEDAGOGICAL POSTURE:
1. Your goal is UNDERSTANDING. Help the student assimilate concepts; never do the work in their place.
2. NEVER write a complete assignment, a full essay, or solve an exercise end to end.
3. When asked to do the student's work, decompose the task instead: explain the methodology, define the key concepts, and point to the relevant parts of the course so the student can build their own answer.
4. Ask reflective questions to check understanding or suggest lines of inquiry.

ANSWERING RULES:
1. Your answer below is composed ONLY from the provided course material or, when explicitly marked, from web search results.
2. If a document is selected, stay strictly within that document.
3. Never answer a question unrelated to the selected course; refuse it plainly.
4. State clearly whether the information comes from the course (internal) or from the web (external).
5. Make no claim without a source in the provided material.

STYLE (MARKDOWN):
1. Use '###' for main sections.
2. Bold key concepts, italics for quotations or Latin terms.
3. Organize explanations with bullet or numbered lists.
4. Keep answers airy with clear line breaks.
5. Use relevant emojis sparingly to keep the reading pleasant.
6. When comparing two concepts, use a Markdown table."#,
            course = course_label
        )
    }

    /// Rewrite a follow-up question into a self-contained query using the
    /// conversation so far.
    pub fn reformulation_prompt(question: &str, history: &[ChatTurn]) -> String {
        format!(
            r#"Rewrite the user's latest message as one self-contained search query, resolving pronouns and ellipses against the conversation.
Example: after discussing democracy, "give me examples" becomes "examples of democracy in political science", not just "examples".
Reply with the query only, no explanation.

CONVERSATION:
{history}

LATEST MESSAGE:
{question}"#,
            history = format_history(history),
            question = question
        )
    }

    /// User prompt composing an answer from internally retrieved material.
    pub fn compose_internal(question: &str, history: &[ChatTurn], chunks: &[Chunk]) -> String {
        format!(
            r#"COURSE MATERIAL (retrieved from the internal documents):
{context}

PREVIOUS EXCHANGES:
{history}

QUESTION:
{question}

Answer from the course material above, and say the information comes from the course (internal). If the material genuinely does not contain the answer, say so instead of guessing."#,
            context = join_chunks(chunks),
            history = format_history(history),
            question = question
        )
    }

    /// User prompt composing an answer from web-search results after the
    /// student consented to an external search.
    pub fn compose_external(question: &str, history: &[ChatTurn], results: &str) -> String {
        format!(
            r#"WEB SEARCH RESULTS (the student explicitly asked for an internet search):
{results}

PREVIOUS EXCHANGES:
{history}

QUESTION:
{question}

Answer from the web results above, and say clearly that the information comes from the internet (external), not from the course."#,
            results = results,
            history = format_history(history),
            question = question
        )
    }

    /// Strict-JSON quiz generation prompt.
    pub fn quiz_prompt(topic: &str, chunks: &[Chunk]) -> String {
        format!(
            r#"You are an expert political-science teacher.
The student wants a multiple-choice quiz on the following topic: "{topic}"

Use the reference documents provided below to write the questions.

Reply EXCLUSIVELY with valid JSON.

Expected format:
{{
  "title": "Quiz title",
  "questions": [
    {{
      "question": "Question text",
      "choices": ["Choice 0", "Choice 1", "Choice 2", "Choice 3"],
      "correct": 0,
      "explanation": "Why this is the right answer"
    }}
  ]
}}

Reference documents:
{context}"#,
            topic = topic,
            context = join_chunks(chunks)
        )
    }

    /// Formal revision-sheet prompt (no tables, no emojis).
    pub fn sheet_prompt(course_name: &str, chunks: &[Chunk]) -> String {
        format!(
            r#"You are a pedagogy expert specialized in political science.
Write an academic revision sheet for the course: "{course}".
Use exclusively the documents provided.

FORMATTING RULES (MANDATORY):
1. Use '###' for main sections.
2. Bold the key concepts.
3. Organize with bullet lists.
4. Keep the layout airy with clear line breaks.
5. NEVER produce Markdown tables; use structured, hierarchical bullet lists instead.
6. Do NOT use any emoji; keep a formal academic tone.

Expected structure:
- A stately title
- Introduction (what is at stake in the course)
- Key Concepts (definitions in bold)
- Thematic Synthesis (essential points)

Reference text:
{context}"#,
            course = course_name,
            context = join_chunks(chunks)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_starts_with_fixed_prefix() {
        let offer = external_offer("Intro to Democracy");
        assert!(offer.starts_with(EXTERNAL_OFFER_PREFIX));
        assert!(offer.contains("Intro to Democracy"));
        assert!(offer.contains("search the internet"));
    }

    #[test]
    fn test_system_prompt_names_course() {
        let prompt = PromptBuilder::tutor_system_prompt("Comparative Politics");
        assert!(prompt.contains("Comparative Politics"));
        assert!(prompt.contains("NEVER write a complete assignment"));
    }

    #[test]
    fn test_compose_internal_embeds_material_and_history() {
        let chunks = vec![Chunk::new("Democracy is rule by the people.", "Intro")];
        let history = vec![ChatTurn::user("hello")];
        let prompt = PromptBuilder::compose_internal("What is democracy?", &history, &chunks);
        assert!(prompt.contains("Democracy is rule by the people."));
        assert!(prompt.contains("USER: hello"));
        assert!(prompt.contains("What is democracy?"));
    }

    #[test]
    fn test_quiz_prompt_demands_json() {
        let prompt = PromptBuilder::quiz_prompt("elections", &[]);
        assert!(prompt.contains("EXCLUSIVELY with valid JSON"));
        assert!(prompt.contains("\"correct\""));
    }
}
