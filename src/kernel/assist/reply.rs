use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

use super::contains_any;

const FILES: &str = "I can help you with file operations! Your project has the following structure:

```
src/
├── components/
│   ├── home.tsx
│   └── nexus/
│       ├── InlineCommandPalette.tsx
│       ├── NexusChat.tsx
│       └── ErrorCorrectionTooltip.tsx
└── utils/
    └── helpers.ts
```

Click any file in the explorer to open it in a new tab. Would you like me to create a new file or explain one of these?";

const SAVING: &str = "To save files in Nexus Editor:

1. **Keyboard shortcut**: Press `Ctrl+S` (or `Cmd+S` on Mac)
2. **File indicator**: Unsaved files show a dot (•) next to their name
3. **Closing tabs**: `Ctrl+W` closes the current tab; your edits stay cached until you save

Is there anything else you'd like to know about file management?";

const AUTH: &str = "I can see your project uses authentication. Here's the main authentication logic:

```typescript
async function authenticateUser(email: string, password: string): Promise<AuthResult> {
  try {
    const response = await api.post('/auth/login', { email, password });
    const { token, user } = response.data;

    // Store token securely
    localStorage.setItem('auth_token', token);

    return { success: true, user, token };
  } catch (error) {
    return { success: false, error: error.message };
  }
}
```

This is typically called from your login components. Would you like me to help you implement JWT token refresh or add OAuth integration?";

const COMPONENTS: &str = "I can help you with React components! Your project structure looks great. Here are some suggestions:

```typescript
// Example of a reusable component pattern
interface ButtonProps {
  variant: 'primary' | 'secondary';
  onClick: () => void;
  children: React.ReactNode;
}

export const Button = ({ variant, onClick, children }: ButtonProps) => (
  <button className={`btn btn-${variant}`} onClick={onClick}>
    {children}
  </button>
);
```

Would you like me to help you create a specific component?";

const DEBUGGING: &str = "I can help you debug issues! Common patterns I see:

1. **State Management**: Make sure you're using useState correctly
2. **Effect Dependencies**: Check your useEffect dependency arrays
3. **Type Safety**: Add TypeScript types to catch errors early

Try hovering over a highlighted line in the editor and use **Fix with AI** for a suggested correction. What error are you seeing?";

const API: &str = "For API integration, I recommend this pattern:

```typescript
// API service layer
class ApiService {
  private baseURL = process.env.REACT_APP_API_URL;

  async get<T>(endpoint: string): Promise<T> {
    const response = await fetch(`${this.baseURL}${endpoint}`, {
      headers: {
        'Authorization': `Bearer ${localStorage.getItem('token')}`,
        'Content-Type': 'application/json'
      }
    });

    if (!response.ok) throw new Error('API request failed');
    return response.json();
  }
}

export const api = new ApiService();
```

This provides type safety and centralized error handling. Need help with a specific endpoint?";

const STYLING: &str = "For styling, you're using Tailwind CSS which is great! Here are some best practices:

```typescript
// Use CSS variables for consistent theming
const Button = ({ variant }: { variant: 'primary' | 'secondary' }) => (
  <button className={cn(
    'px-4 py-2 rounded-md font-medium',
    variant === 'primary' && 'bg-primary text-primary-foreground',
    variant === 'secondary' && 'bg-secondary text-secondary-foreground'
  )}>
    Click me
  </button>
);
```

Would you like help with a specific design pattern?";

const PERFORMANCE: &str = "Here are some performance optimization tips for your React app:

```typescript
// 1. Memoize expensive calculations
const expensiveValue = useMemo(() => {
  return heavyComputation(data);
}, [data]);

// 2. Memoize callbacks
const handleClick = useCallback(() => {
  doSomething(id);
}, [id]);

// 3. Lazy load components
const HeavyComponent = React.lazy(() => import('./HeavyComponent'));
```

Which part of your app feels slow?";

const TESTING: &str = "Testing is crucial! Here's a testing pattern for your components:

```typescript
import { render, screen, fireEvent } from '@testing-library/react';
import { Button } from './Button';

test('button calls onClick when clicked', () => {
  const handleClick = jest.fn();
  render(<Button onClick={handleClick}>Click me</Button>);

  fireEvent.click(screen.getByText('Click me'));
  expect(handleClick).toHaveBeenCalledTimes(1);
});
```

Want me to generate tests for a specific component?";

const FALLBACKS: [&str; 5] = [
    "I can help you with that! Could you provide more specific details about what you're trying to accomplish?",
    "Based on your codebase, I can assist with React components, TypeScript, API integration, or styling. What would you like to focus on?",
    "I'm analyzing your project structure. It looks like you're building a code editor. What specific functionality are you working on?",
    "I can help with debugging, optimization, or adding new features. What's your current challenge?",
    "Your project uses modern React patterns. I can help with state management, component architecture, or performance optimization. What interests you?",
];

pub fn chat_reply(query: &str) -> String {
    let lower = query.to_lowercase();

    let reply = if contains_any(&lower, &["file", "open", "create"]) {
        FILES
    } else if contains_any(&lower, &["save", "ctrl+s"]) {
        SAVING
    } else if contains_any(&lower, &["authentication", "auth"]) {
        AUTH
    } else if contains_any(&lower, &["component", "react"]) {
        COMPONENTS
    } else if contains_any(&lower, &["error", "bug", "fix"]) {
        DEBUGGING
    } else if contains_any(&lower, &["api", "endpoint", "fetch"]) {
        API
    } else if contains_any(&lower, &["style", "css", "design"]) {
        STYLING
    } else if contains_any(&lower, &["performance", "optimize"]) {
        PERFORMANCE
    } else if lower.contains("test") {
        TESTING
    } else {
        fallback(&lower)
    };
    reply.to_string()
}

fn fallback(query: &str) -> &'static str {
    let mut hasher = FxHasher::default();
    query.hash(&mut hasher);
    FALLBACKS[(hasher.finish() % FALLBACKS.len() as u64) as usize]
}
