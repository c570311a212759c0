// Shared prompt fragments. Analysis-specific prompts live in analysis::prompts.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are an expert resume analyst. \
    Always respond with valid JSON only, no markdown formatting.";

/// Trailing instruction appended to every structured-output prompt.
pub const JSON_ONLY_REMINDER: &str = "Return ONLY valid JSON, no additional text";
