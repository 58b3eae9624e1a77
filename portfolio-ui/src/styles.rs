//! Page stylesheet.
//!
//! Dark glass theme: blurred color blobs behind translucent bento tiles,
//! indigo/purple accents, fade-in-up entry animations.
//!
//! ```rust
//! use portfolio_ui::styles::PORTFOLIO_CSS;
//!
//! let themed = format!("{PORTFOLIO_CSS}\n.bento-card {{ border-radius: 0; }}");
//! assert!(themed.contains("bento-grid"));
//! ```

/// Complete CSS for the portfolio page.
pub const PORTFOLIO_CSS: &str = r#"
:root {
    --bg: #0a0a0a;
    --glass: rgba(17, 24, 39, 0.4);
    --glass-border: rgba(255, 255, 255, 0.1);
    --text: #ffffff;
    --text-dim: #9ca3af;
    --text-mute: #6b7280;
    --indigo: #6366f1;
    --purple: #a855f7;
    --pink: #ec4899;
    --green: #22c55e;
    --red: #ef4444;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    line-height: 1.5;
    overflow-x: hidden;
}

::selection { background: rgba(99, 102, 241, 0.3); }

a { color: inherit; text-decoration: none; }

@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

.spin { animation: spin 1s linear infinite; }

/* Backdrop */
.backdrop { position: fixed; inset: 0; z-index: 0; pointer-events: none; overflow: hidden; }
.blob { position: absolute; width: 500px; height: 500px; border-radius: 9999px; filter: blur(120px); }
.blob-indigo { top: -10%; left: -10%; background: rgba(79, 70, 229, 0.2); animation: pulse 4s ease-in-out infinite; }
.blob-purple { bottom: -10%; right: -10%; background: rgba(147, 51, 234, 0.2); animation: pulse 4s ease-in-out 2s infinite; }

.page { position: relative; min-height: 100vh; }
.main { position: relative; z-index: 10; max-width: 80rem; margin: 0 auto; padding: 8rem 1.5rem 5rem; }

/* Nav */
.nav {
    position: fixed; top: 0; left: 0; right: 0; z-index: 50;
    padding: 1.5rem 0; transition: all 0.3s;
}
.nav.nav-scrolled {
    padding: 1rem 0;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(24px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}
.nav-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; display: flex; align-items: center; justify-content: space-between; }
.nav-brand { display: flex; align-items: center; gap: 0.75rem; font-weight: 700; font-size: 1.25rem; }
.nav-logo {
    width: 2.5rem; height: 2.5rem; border-radius: 0.75rem;
    display: flex; align-items: center; justify-content: center;
    background: linear-gradient(135deg, var(--indigo), var(--purple));
    box-shadow: 0 0 20px rgba(99, 102, 241, 0.5);
}
.nav-links {
    display: none; gap: 0.25rem; padding: 0.375rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--glass-border); border-radius: 9999px;
}
.nav-link { padding: 0.5rem 1.25rem; border-radius: 9999px; font-size: 0.875rem; color: var(--text-dim); transition: all 0.2s; }
.nav-link:hover { color: var(--text); background: rgba(255, 255, 255, 0.1); }
.nav-actions { display: flex; align-items: center; gap: 1rem; }
.nav-clock { display: none; font-family: monospace; font-size: 0.875rem; color: var(--text-mute); }
.open-to-work {
    display: none; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem;
    border-radius: 9999px; font-size: 0.875rem; font-weight: 500;
    background: rgba(34, 197, 94, 0.1); border: 1px solid rgba(34, 197, 94, 0.2); color: #4ade80;
}
.pulse-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--green); animation: pulse 2s infinite; }
.menu-toggle { background: none; border: none; color: var(--text); cursor: pointer; }
.mobile-menu {
    position: fixed; inset: 0; z-index: 40; padding: 6rem 1.5rem;
    background: rgba(0, 0, 0, 0.95); backdrop-filter: blur(24px);
    display: flex; flex-direction: column; gap: 1.5rem;
}
.mobile-menu-title { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--text-mute); }
.mobile-menu-inner { display: flex; flex-direction: column; gap: 1.5rem; }
.mobile-link { display: flex; align-items: center; gap: 1rem; font-size: 1.5rem; font-weight: 700; color: var(--text-dim); }
.mobile-link:hover { color: var(--text); }

/* Demo banner */
.demo-banner {
    position: relative; z-index: 20; margin: 6rem auto -5rem; max-width: 80rem;
    display: flex; align-items: center; justify-content: center; gap: 0.5rem;
    padding: 0.5rem 1rem; font-size: 0.875rem;
    background: rgba(234, 179, 8, 0.1); border: 1px solid rgba(234, 179, 8, 0.3); border-radius: 0.75rem;
    color: #facc15;
}
.demo-banner-dim { color: rgba(250, 204, 21, 0.6); }

/* Bento grid */
.bento-grid {
    display: grid; grid-template-columns: 1fr; gap: 1rem;
    grid-auto-rows: minmax(180px, auto); margin-bottom: 6rem;
}
.bento-card {
    position: relative; overflow: hidden; padding: 1.5rem;
    background: var(--glass); border: 1px solid var(--glass-border); border-radius: 1.5rem;
    backdrop-filter: blur(24px);
    opacity: 0; animation: fadeInUp 0.8s ease-out forwards;
    transition: border-color 0.5s;
}
.bento-card:hover { border-color: rgba(255, 255, 255, 0.2); }
.bento-title { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--text-mute); margin-bottom: 1rem; }
.bento-body { position: relative; z-index: 10; height: 100%; display: flex; flex-direction: column; }
.intro-title { font-size: 2.5rem; font-weight: 700; line-height: 1.1; margin-bottom: 1rem; }
.gradient-text {
    background: linear-gradient(90deg, #818cf8, #c084fc, #f472b6);
    -webkit-background-clip: text; background-clip: text; color: transparent;
}
.intro-tagline { color: var(--text-dim); font-size: 1.125rem; max-width: 28rem; }
.intro-actions { display: flex; gap: 1rem; margin-top: 2rem; }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1.5rem; border-radius: 0.75rem; font-weight: 700; transition: all 0.2s; }
.btn-primary { background: var(--text); color: #000; }
.btn-primary:hover { background: #e5e7eb; }
.btn-secondary { background: rgba(255, 255, 255, 0.05); border: 1px solid var(--glass-border); }
.btn-secondary:hover { background: rgba(255, 255, 255, 0.1); }
.bento-photo { padding: 0; min-height: 300px; }
.photo { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
.bento-photo:hover .photo { transform: scale(1.05); }
.photo-caption { position: absolute; bottom: 1.5rem; left: 1.5rem; display: flex; flex-direction: column; }
.photo-name { font-size: 1.25rem; font-weight: 700; }
.photo-role { font-size: 0.875rem; color: #d1d5db; }
.stack-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.stack-chip {
    padding: 0.375rem 0.75rem; border-radius: 0.5rem; font-size: 0.75rem; font-weight: 500;
    background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.05); color: #d1d5db;
}
.bento-reel-slot { cursor: pointer; }
.bento-reel { padding: 0; min-height: 200px; height: 100%; }
.reel-preview { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.6; }
.reel-play {
    position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);
    width: 4rem; height: 4rem; border-radius: 9999px;
    display: flex; align-items: center; justify-content: center;
    background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(12px); transition: transform 0.3s;
}
.bento-reel-slot:hover .reel-play { transform: translate(-50%, -50%) scale(1.1); }
.reel-caption { position: absolute; bottom: 1rem; left: 1rem; font-size: 0.875rem; font-weight: 500; }
.stats-row { display: flex; align-items: flex-end; justify-content: space-between; height: 100%; }
.stats-big { font-size: 3rem; font-weight: 700; }
.stats-unit { margin-left: 0.5rem; color: var(--text-mute); }
.stats-side { text-align: right; }
.stats-mid { font-size: 1.5rem; font-weight: 700; color: #818cf8; }
.stats-caption { font-size: 0.75rem; color: var(--text-mute); }
.social-row { display: flex; align-items: center; justify-content: space-around; height: 100%; }
.social-btn { padding: 1rem; border-radius: 1rem; background: rgba(255, 255, 255, 0.05); transition: all 0.2s; }
.social-btn:hover { background: var(--text); color: #000; }

/* Video modal */
.video-modal {
    position: fixed; inset: 0; z-index: 100; padding: 1rem;
    display: flex; align-items: center; justify-content: center;
    background: rgba(0, 0, 0, 0.9); backdrop-filter: blur(12px);
}
.video-close { position: absolute; top: 1.5rem; right: 1.5rem; background: none; border: none; color: var(--text-dim); cursor: pointer; }
.video-close:hover { color: var(--text); }
.video-frame { width: 100%; max-width: 64rem; aspect-ratio: 16 / 9; border-radius: 1rem; overflow: hidden; background: #000; }
.video-frame video { width: 100%; height: 100%; }

/* Projects */
.projects-section { margin-bottom: 6rem; }
.section-heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 2.5rem; }
.section-heading h3 { font-size: 1.875rem; font-weight: 700; }
.section-icon { padding: 0.5rem; border-radius: 0.5rem; background: rgba(99, 102, 241, 0.2); color: #818cf8; display: flex; }
.projects-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
.loading-tile {
    grid-column: 1 / -1; height: 16rem; display: flex; align-items: center; justify-content: center; gap: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.05); border-radius: 1.5rem; color: var(--text-mute);
}
.project-card {
    display: flex; flex-direction: column; overflow: hidden;
    background: var(--glass); border: 1px solid var(--glass-border); border-radius: 1.5rem;
    opacity: 0; animation: fadeInUp 0.8s ease-out forwards; transition: border-color 0.5s;
}
.project-card:hover { border-color: rgba(255, 255, 255, 0.2); }
.project-cover { position: relative; display: block; height: 12rem; overflow: hidden; background: #111827; }
.project-image { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
.project-card:hover .project-image { transform: scale(1.1); }
.project-placeholder { width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; color: #374151; }
.project-badge {
    position: absolute; top: 1rem; right: 1rem; display: flex; align-items: center; gap: 0.25rem;
    padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 700;
    background: rgba(0, 0, 0, 0.6); border: 1px solid var(--glass-border);
    opacity: 0; transform: translateY(-0.5rem); transition: all 0.3s;
}
.project-card:hover .project-badge { opacity: 1; transform: translateY(0); }
.project-body { padding: 1.5rem; display: flex; flex-direction: column; flex: 1; }
.project-head { display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 0.5rem; }
.project-title { font-size: 1.25rem; font-weight: 700; transition: color 0.2s; }
.project-title-link:hover .project-title { color: #818cf8; }
.repo-link { padding: 0.5rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.05); color: var(--text-dim); }
.repo-link:hover { background: rgba(255, 255, 255, 0.1); color: var(--text); }
.project-description {
    color: var(--text-dim); font-size: 0.875rem; margin-bottom: 1.5rem;
    display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden;
}
.tech-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: auto; }
.tech-tag {
    padding: 0.25rem 0.5rem; border-radius: 0.25rem; font-size: 0.625rem;
    text-transform: uppercase; letter-spacing: 0.05em; font-weight: 700;
    background: rgba(99, 102, 241, 0.1); border: 1px solid rgba(99, 102, 241, 0.2); color: #a5b4fc;
}

/* Skills & timeline */
.info-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; margin-bottom: 6rem; }
.panel {
    padding: 2rem; border-radius: 1.5rem;
    background: rgba(17, 24, 39, 0.3); border: 1px solid rgba(255, 255, 255, 0.05);
}
.panel-title { display: flex; align-items: center; gap: 0.75rem; font-size: 1.5rem; font-weight: 700; margin-bottom: 2rem; }
.accent-indigo { color: #818cf8; }
.accent-pink { color: #f472b6; }
.skill-list { display: flex; flex-direction: column; gap: 1.5rem; }
.skill-row { display: flex; align-items: center; gap: 1rem; }
.skill-icon { padding: 0.75rem; border-radius: 0.75rem; background: rgba(255, 255, 255, 0.05); color: var(--text-dim); transition: all 0.2s; }
.skill-row:hover .skill-icon { background: rgba(99, 102, 241, 0.2); color: #818cf8; }
.skill-meter { flex: 1; }
.skill-label { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
.skill-name { font-weight: 500; color: #d1d5db; }
.skill-percent { font-size: 0.875rem; color: var(--text-mute); }
.skill-track { height: 0.5rem; border-radius: 9999px; background: #1f2937; overflow: hidden; }
.skill-fill { height: 100%; border-radius: 9999px; background: linear-gradient(90deg, var(--indigo), var(--purple)); transition: width 1s ease-out; }
.timeline { position: relative; display: flex; flex-direction: column; gap: 2rem; padding-left: 2rem; border-left: 1px solid rgba(255, 255, 255, 0.1); margin-left: 0.75rem; }
.timeline-entry { position: relative; }
.timeline-dot {
    position: absolute; left: -2.4rem; top: 0.4rem; width: 0.75rem; height: 0.75rem;
    border-radius: 9999px; background: #1f2937; border: 2px solid var(--bg); transition: background 0.2s;
}
.timeline-entry:hover .timeline-dot, .timeline-entry.ongoing .timeline-dot { background: var(--indigo); }
.timeline-title { font-size: 1.125rem; font-weight: 700; }
.timeline-company { font-weight: 500; color: #818cf8; margin-bottom: 0.25rem; }
.timeline-period { font-size: 0.75rem; font-family: monospace; color: var(--text-mute); margin-bottom: 0.75rem; }
.timeline-description { font-size: 0.875rem; color: var(--text-dim); }

/* Contact */
.contact-section { display: flex; justify-content: center; margin-bottom: 5rem; }
.contact-card {
    position: relative; overflow: hidden; width: 100%; max-width: 48rem; padding: 3rem 2rem;
    text-align: center; border-radius: 1.5rem;
    background: linear-gradient(135deg, rgba(49, 46, 129, 0.2), rgba(88, 28, 135, 0.2));
    border: 1px solid rgba(255, 255, 255, 0.1);
}
.contact-glow {
    position: absolute; top: -50%; left: -50%; width: 200%; height: 200%;
    background: radial-gradient(circle, rgba(99, 102, 241, 0.1) 0%, transparent 70%); pointer-events: none;
}
.contact-title { position: relative; font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
.contact-lead { position: relative; color: var(--text-dim); font-size: 1.125rem; margin-bottom: 2.5rem; }
.contact-form { position: relative; display: flex; flex-direction: column; gap: 1rem; text-align: left; }
.contact-form input, .contact-form textarea {
    width: 100%; padding: 1rem 1.5rem; border-radius: 0.75rem; font: inherit; color: var(--text);
    background: rgba(0, 0, 0, 0.4); border: 1px solid rgba(255, 255, 255, 0.1);
    transition: border-color 0.2s;
}
.contact-form input:focus, .contact-form textarea:focus { outline: none; border-color: var(--indigo); }
.submit-btn {
    display: flex; align-items: center; justify-content: center; gap: 0.5rem;
    width: 100%; padding: 1rem; border: none; border-radius: 0.75rem; cursor: pointer;
    font: inherit; font-weight: 700; font-size: 1.125rem;
    background: var(--text); color: #000; transition: all 0.2s;
}
.submit-btn:hover:not(:disabled) { background: #e5e7eb; }
.submit-btn:disabled { opacity: 0.5; cursor: not-allowed; }
.contact-form[data-status="success"] .submit-btn { background: var(--green); color: var(--text); }
.contact-form[data-status="error"] .submit-btn { background: var(--red); color: var(--text); }

/* Footer */
.footer {
    position: relative; z-index: 10; padding: 2rem 0; text-align: center;
    font-size: 0.875rem; color: #4b5563; border-top: 1px solid rgba(255, 255, 255, 0.05);
}

@media (min-width: 768px) {
    .nav-links, .open-to-work { display: flex; }
    .nav-clock { display: inline; }
    .menu-toggle { display: none; }
    .intro-title { font-size: 3.75rem; }
    .bento-grid { grid-template-columns: repeat(4, 1fr); }
    .bento-intro { grid-column: span 2; grid-row: span 2; }
    .bento-photo { grid-row: span 2; }
    .bento-stack, .bento-reel-slot { grid-column: span 1; }
    .bento-stats { grid-column: span 2; }
    .bento-social { grid-column: span 2; }
    .projects-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .projects-grid { grid-template-columns: repeat(3, 1fr); }
    .info-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;
