const TOKENS_PER_WORD: f64 = 1.3;
pub const PROMPT_OVERHEAD_TOKENS: u64 = 200;

/// Rough token count for `words` words when the provider does not report usage.
pub fn tokens_for_words(words: usize) -> u64 {
    (words as f64 * TOKENS_PER_WORD).ceil() as u64
}

/// Tokens for a summary prompt wrapping a transcript of `words` words.
pub fn prompt_tokens_for_words(words: usize) -> u64 {
    tokens_for_words(words) + PROMPT_OVERHEAD_TOKENS
}

pub fn estimate_tokens(text: &str) -> u64 {
    tokens_for_words(text.split_whitespace().count())
}

pub fn estimate_prompt_tokens(transcript: &str) -> u64 {
    prompt_tokens_for_words(transcript.split_whitespace().count())
}
