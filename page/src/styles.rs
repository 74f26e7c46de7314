//! CSS for the landing page.
//!
//! Inlined into `<head>` so the rendered file has no external assets.
//!
//! To extend or override styles:
//!
//! ```rust
//! use terraflow_page::styles::PAGE_CSS;
//!
//! let my_css = ".hero { padding: 6rem 2rem; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```

/// Complete stylesheet - soft greens and earth tones.
pub const PAGE_CSS: &str = r#"
:root {
    --moss: #4f6f52;
    --moss-dark: #2f4632;
    --sage: #a9b89d;
    --sand: #f5f1e8;
    --clay: #d8c3a5;
    --ink: #2b2b2b;
    --ink-soft: #5c5c5c;
    --radius: 14px;
    --font-body: 'Nunito', 'Segoe UI', sans-serif;
    --font-display: 'Playfair Display', Georgia, serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-body);
    color: var(--ink);
    background: var(--sand);
    line-height: 1.6;
}

.header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.25rem 2rem;
    background: var(--moss-dark);
    color: var(--sand);
}

.logo {
    margin: 0;
    font-family: var(--font-display);
    font-size: 1.6rem;
    letter-spacing: 0.02em;
}

.header nav a {
    margin-left: 1.5rem;
    color: var(--sand);
    text-decoration: none;
    opacity: 0.85;
}

.header nav a:hover {
    opacity: 1;
}

.hero {
    padding: 5rem 2rem;
    text-align: center;
    background: linear-gradient(160deg, var(--sage), var(--moss));
    color: #fff;
}

.hero h2 {
    margin: 0 0 1rem;
    font-family: var(--font-display);
    font-size: 2.4rem;
}

.btn {
    display: inline-block;
    margin-top: 1.5rem;
    padding: 0.75rem 1.75rem;
    border-radius: 999px;
    background: var(--sand);
    color: var(--moss-dark);
    font-weight: 600;
    text-decoration: none;
}

.section {
    padding: 4rem 2rem;
    text-align: center;
}

.section h3 {
    margin: 0 0 2rem;
    font-family: var(--font-display);
    font-size: 1.8rem;
    color: var(--moss-dark);
}

.alt-bg {
    background: var(--clay);
}

.card-container {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
}

.card {
    flex: 1 1 240px;
    max-width: 320px;
    padding: 1.75rem;
    border-radius: var(--radius);
    text-align: left;
}

.calm {
    background: #fff;
    box-shadow: 0 6px 18px rgba(47, 70, 50, 0.08);
}

.calm-dark {
    background: var(--moss-dark);
    color: var(--sand);
}

.card h4 {
    margin: 0 0 0.5rem;
    color: var(--moss);
}

form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    max-width: 520px;
    margin: 0 auto;
}

input, textarea {
    padding: 0.85rem 1rem;
    border: 1px solid var(--sage);
    border-radius: 10px;
    font: inherit;
    background: #fff;
}

button[type="submit"] {
    padding: 0.85rem;
    border: none;
    border-radius: 999px;
    background: var(--moss);
    color: #fff;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
}

footer {
    padding: 2rem;
    text-align: center;
    background: var(--moss-dark);
    color: var(--sand);
    font-size: 0.9rem;
}

@media (max-width: 640px) {
    .header {
        flex-direction: column;
        gap: 0.75rem;
    }

    .header nav a {
        margin: 0 0.75rem;
    }

    .hero h2 {
        font-size: 1.8rem;
    }
}
"#;
