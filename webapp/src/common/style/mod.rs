use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::GALLERY_STYLES;
pub use variables::CSS_VARIABLES;

pub const APP_STYLES: &str = concat!(
    CSS_VARIABLES,
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}
"#,
    BASE_COMPONENTS,
    GALLERY_STYLES
);
