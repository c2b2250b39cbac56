pub const CSS_VARIABLES: &str = r#"
:root {
  /* Palette */
  --primary: #B4536B;          /* rose, buttons and active tabs */
  --primary-dark: #8E3A50;
  --accent: #E0A526;           /* marigold */
  --success: #2F9E6B;
  --error: #D64545;

  --neutral-100: #FAF6F2;
  --neutral-200: #EFE7E0;
  --neutral-400: #B3A79D;
  --neutral-600: #6E6259;
  --neutral-900: #2A211C;

  --background: var(--neutral-100);
  --surface: #FFFFFF;
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;

  --radius-md: 0.5rem;
  --radius-lg: 1rem;

  --shadow-sm: 0 1px 3px rgba(0, 0, 0, 0.08);
  --shadow-md: 0 6px 16px rgba(0, 0, 0, 0.12);

  --transition-fast: 150ms;
}
"#;
