//! Global CSS styles for the portfolio.
//!
//! Class names match the ones the page model toggles: `hidden`,
//! `scrolled`, `active`, plus inline styles for everything animated.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --ink: #0f172a;
  --ink-raised: #1e293b;
  --ink-border: #334155;

  /* ACCENT */
  --indigo: #6366f1;
  --indigo-glow: rgba(99, 102, 241, 0.35);
  --violet: #8b5cf6;

  /* TEXT */
  --text-primary: #f8fafc;
  --text-secondary: rgba(248, 250, 252, 0.7);
  --text-muted: rgba(248, 250, 252, 0.45);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.7;
  cursor: none;
}

a {
  color: inherit;
  text-decoration: none;
}

.page {
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Loader === */
.page-loader {
  position: fixed;
  inset: 0;
  z-index: 10000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--ink);
  transition: opacity 0.8s ease, visibility 0.8s ease;
}

.page-loader.hidden {
  opacity: 0;
  visibility: hidden;
}

.loader-ring {
  width: 48px;
  height: 48px;
  border: 3px solid var(--ink-border);
  border-top-color: var(--indigo);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Cursor === */
.cursor-dot,
.cursor-outline {
  position: fixed;
  top: 0;
  left: 0;
  z-index: 9999;
  pointer-events: none;
  border-radius: 50%;
  transform: translate(-50%, -50%);
}

.cursor-dot {
  width: 8px;
  height: 8px;
  background: var(--indigo);
}

.cursor-outline {
  width: 40px;
  height: 40px;
  border: 2px solid var(--text-secondary);
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem 5%;
  transition: background var(--transition-normal), padding var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  padding: 1rem 5%;
  background: rgba(15, 23, 42, 0.92);
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
  backdrop-filter: blur(10px);
}

.nav-logo {
  font-size: 1.4rem;
  font-weight: 700;
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--indigo);
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
}

.nav-toggle .bar {
  width: 25px;
  height: 3px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.nav-toggle.active .bar:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.nav-toggle.active .bar:nth-child(2) { opacity: 0; }
.nav-toggle.active .bar:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: 70px;
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    padding: 2rem 0;
    background: var(--ink-raised);
    transition: left var(--transition-normal);
  }

  .nav-menu.active {
    left: 0;
  }
}

/* === Sections === */
section {
  padding: 6rem 10%;
}

.section-title {
  font-size: 2.5rem;
  margin-bottom: 3rem;
  text-align: center;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
}

.hero-shapes {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.shape {
  position: absolute;
  border-radius: 50%;
  opacity: 0.15;
  filter: blur(2px);
  background: linear-gradient(135deg, var(--indigo), var(--violet));
}

.shape-1 { width: 300px; height: 300px; top: 10%; left: 5%; }
.shape-2 { width: 200px; height: 200px; top: 60%; right: 10%; }
.shape-3 { width: 150px; height: 150px; top: 30%; right: 30%; }
.shape-4 { width: 100px; height: 100px; bottom: 10%; left: 40%; }

.hero-content {
  position: relative;
  max-width: 720px;
}

.hero-title {
  font-size: 3.5rem;
  line-height: 1.2;
  margin-bottom: 1.5rem;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: 2.5rem;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.9rem 2.2rem;
  border: none;
  border-radius: 999px;
  background: var(--indigo);
  color: var(--text-primary);
  font: inherit;
  font-weight: 600;
  cursor: none;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), opacity var(--transition-fast);
}

.btn:hover {
  transform: translateY(-2px);
  box-shadow: 0 10px 30px var(--indigo-glow);
}

.btn:disabled {
  opacity: 0.6;
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
}

.about-description {
  color: var(--text-secondary);
  font-size: 1.1rem;
}

.skill {
  margin-bottom: 1.5rem;
}

.skill-info {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
}

.skill-level {
  color: var(--text-muted);
  font-family: var(--font-mono);
}

.skill-bar {
  height: 8px;
  border-radius: 4px;
  background: var(--ink-raised);
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  width: 0;
  border-radius: 4px;
  background: linear-gradient(90deg, var(--indigo), var(--violet));
  transition: width 1.5s ease;
}

/* === Work === */
.work-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
}

.work-item {
  padding: 2rem;
  border: 1px solid var(--ink-border);
  border-radius: 16px;
  background: var(--ink-raised);
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.work-item:hover {
  transform: translateY(-6px);
  border-color: var(--indigo);
}

.work-item h3 {
  margin-bottom: 0.75rem;
}

.work-item p {
  color: var(--text-secondary);
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 4rem;
}

.contact-item {
  padding: 1.5rem 0;
  border-bottom: 1px solid var(--ink-border);
}

.contact-item p {
  color: var(--text-secondary);
}

.form-group {
  margin-bottom: 1.25rem;
}

.form-input {
  width: 100%;
  padding: 1rem 1.25rem;
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  background: var(--ink-raised);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast);
}

.form-input:focus {
  outline: none;
  border-color: var(--indigo);
}

.form-input::placeholder {
  color: var(--text-muted);
}

@media (max-width: 768px) {
  .hero-title {
    font-size: 2.5rem;
  }

  .about-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }
}
"#;
