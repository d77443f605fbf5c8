//! Default workspace: the sample project the editor starts with.

use super::seed_tree::{SeedTree, SeedTreeError};

pub const DEFAULT_FILE: &str = "src/components/home.tsx";

const HOME_TSX: &str = r#"function fetchData() {
  return fetch('https://api.example.com/data')
    .then(response => response.json())
    .then(data => {
      console.log(data);
      return data;
    })
    .catch(error => {
      console.error('Error fetching data:', error);
    });
}

// This function has a linting error - unused variable
function processData(data) {
  const unusedVar = 'This variable is never used';
  return data.map(item => item.value * 2);
}"#;

const INLINE_COMMAND_PALETTE_TSX: &str = r#"import React, { useState } from "react";

const InlineCommandPalette = () => {
  const [prompt, setPrompt] = useState("");

  return (
    <div className="command-palette">
      <input
        value={prompt}
        onChange={(e) => setPrompt(e.target.value)}
        placeholder="Enter command..."
      />
    </div>
  );
};

export default InlineCommandPalette;"#;

const NEXUS_CHAT_TSX: &str = r#"import React, { useState } from "react";

const NexusChat = () => {
  const [messages, setMessages] = useState([]);

  return (
    <div className="chat-container">
      <div className="messages">
        {messages.map((msg, i) => (
          <div key={i}>{msg.content}</div>
        ))}
      </div>
    </div>
  );
};

export default NexusChat;"#;

const ERROR_CORRECTION_TOOLTIP_TSX: &str = r#"import React from "react";

const ErrorCorrectionTooltip = ({ error }) => {
  return (
    <div className="error-tooltip">
      <p>{error.message}</p>
      <button>Fix with AI</button>
    </div>
  );
};

export default ErrorCorrectionTooltip;"#;

const HELPERS_TS: &str = r#"export const formatDate = (date: Date): string => {
  return date.toLocaleDateString();
};

export const debounce = (fn: Function, delay: number) => {
  let timeoutId: NodeJS.Timeout;
  return (...args: any[]) => {
    clearTimeout(timeoutId);
    timeoutId = setTimeout(() => fn.apply(null, args), delay);
  };
};"#;

const PACKAGE_JSON: &str = r#"{
  "name": "nexus-editor",
  "version": "1.0.0",
  "dependencies": {
    "react": "^18.2.0",
    "typescript": "^5.0.0"
  }
}"#;

const README_MD: &str = r#"# Nexus Editor

An AI-powered code editor built with React and TypeScript.

## Features

- Inline AI Command Palette
- Smart Error Correction
- Real-time Chat Assistant
- Code Generation and Refactoring

## Getting Started

```bash
npm install
npm run dev
```
"#;

pub fn default_workspace() -> Result<SeedTree, SeedTreeError> {
    let mut tree = SeedTree::new();
    tree.add_file(DEFAULT_FILE, HOME_TSX)?;
    tree.add_file(
        "src/components/nexus/InlineCommandPalette.tsx",
        INLINE_COMMAND_PALETTE_TSX,
    )?;
    tree.add_file("src/components/nexus/NexusChat.tsx", NEXUS_CHAT_TSX)?;
    tree.add_file(
        "src/components/nexus/ErrorCorrectionTooltip.tsx",
        ERROR_CORRECTION_TOOLTIP_TSX,
    )?;
    tree.add_file("src/utils/helpers.ts", HELPERS_TS)?;
    tree.add_file("package.json", PACKAGE_JSON)?;
    tree.add_file("README.md", README_MD)?;
    Ok(tree)
}
