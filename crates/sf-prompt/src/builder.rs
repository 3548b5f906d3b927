//! Prompt payload construction
//!
//! Pure transformation from a [`NormalizedRequest`] to the wire payload for
//! the chat-completion API: a fixed system instruction followed by the
//! request serialized as the user message. No validation, no side effects.

use serde::{Deserialize, Serialize};
use sf_types::AppResult;

use crate::types::NormalizedRequest;

/// Fixed instruction describing the output contract the model must follow.
pub const SYSTEM_PROMPT: &str = r##"You are an Arduino expert specializing in generating complete, functional, and well-documented code for Arduino projects. For each request, follow these steps:

1. **Analyze Requirements**: Carefully evaluate the provided project requirements.
2. **Generate Code**: Create complete, properly structured, and functional code files.
3. **Documentation**: Include detailed comments in the code and provide clear, concise documentation.
4. **Best Practices**: Adhere to Arduino development best practices, including efficient memory usage, modularity, and readability.

**Output Format**:
- Return ONLY a JSON object containing the generated files.
- Do not include any explanations or text outside the JSON structure.

**Required Files**:
1. `code.ino`: The main Arduino sketch with complete `setup()` and `loop()` functions.
2. `README.md`: Project documentation, including wiring instructions (in simple written form) and a usage guide.
3. `config.h` (if needed): A header file for project-specific constants and configurations.

**Example Input**:
```json
{
  "Project name": "smart garden monitor",
  "Definition/use case": "monitor soil moisture and control irrigation",
  "Sensors": ["soil moisture", "DHT11"],
  "Actuators": ["water pump", "LCD"],
  "MCU": "Arduino Nano",
  "Other parameters": {
    "communication": "Serial",
    "control": "automatic",
    "timing": ["every 6 hours", "instant on low moisture"]
  }
}
```

**Expected Output Format**:
```json
{
  "code.ino": "// Complete Arduino code here...",
  "README.md": "# Project Documentation...",
  "config.h": "// Configuration constants..."
}
```

**Handling Ambiguity**:
- If any input parameters are missing or set to "choose the best one," use your expertise to select the most appropriate options based on the project requirements.
- Ensure the generated code is functional, efficient, and adheres to Arduino best practices.
"##;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Wire payload for the chat-completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Build the completion payload: system instruction plus the normalized
/// request serialized compactly as the user message.
pub fn build_payload(request: &NormalizedRequest, model: &str) -> AppResult<ChatPayload> {
    let user_content = serde_json::to_string(request)?;

    Ok(ChatPayload {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_content,
            },
        ],
    })
}
