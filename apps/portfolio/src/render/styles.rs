// Static stylesheet and scripts embedded in the page.

pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css";
pub const CONFETTI_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";
pub const LOTTIE_SCRIPT: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js";

pub const BASE_CSS: &str = r#"
body {
  margin: 0;
  font-family: "Inter", "Segoe UI", system-ui, sans-serif;
  color: #e0e7ef;
  background: linear-gradient(135deg, rgba(15, 23, 42, 0.97), rgba(30, 41, 59, 0.97), rgba(49, 46, 129, 0.97));
  background-attachment: fixed;
  background-size: cover;
}
.page { max-width: 1200px; margin: 0 auto; padding: 2rem 1.5rem; }
.site-bg-glow {
  position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: -2;
  pointer-events: none;
  background:
    radial-gradient(circle at 60% 20%, rgba(14,165,233,0.22) 0%, rgba(36,37,64,0.0) 60%),
    radial-gradient(circle at 80% 80%, rgba(139,92,246,0.18) 0%, rgba(36,37,64,0.0) 70%),
    radial-gradient(circle at 30% 90%, rgba(59,130,246,0.13) 0%, rgba(36,37,64,0.0) 70%);
  filter: blur(40px);
  opacity: 0.95;
}
.fade-in-up { opacity: 0; transform: translateY(40px); animation: fadeInUp 1s cubic-bezier(.23,1.01,.32,1) forwards; }
@keyframes fadeInUp { to { opacity: 1; transform: translateY(0); } }

.notice { border-radius: 8px; padding: 0.8rem 1rem; margin: 0.8rem 0; }
.notice-warning { background: rgba(251, 191, 36, 0.12); color: #fbbf24; }
.notice-error { background: rgba(239, 68, 68, 0.12); color: #f87171; }
.notice-info { background: rgba(59, 130, 246, 0.12); color: #93c5fd; }

.hero { display: grid; grid-template-columns: 3fr 2fr; gap: 2rem; }
.intro-video { border-radius: 1rem; box-shadow: 0 4px 14px rgba(0,0,0,0.08); max-width: 100%; }
.profile-img { width: 120px; height: 120px; object-fit: cover; border-radius: 50%; }
.asset-placeholder {
  width: 120px; height: 120px; border-radius: 50%;
  display: flex; align-items: center; justify-content: center; text-align: center;
  font-size: 0.75rem; color: #94a3b8; border: 2px dashed rgba(148, 163, 184, 0.5);
}
.name { margin-bottom: 0; }
.role { margin-top: 0; }
.download-cv {
  display: inline-block; margin-top: 0.5rem; padding: 0.6rem 1.2rem; border-radius: 8px;
  background: linear-gradient(90deg, #0ea5e9, #6366f1); color: #fff; text-decoration: none;
}

.header-social-links { display: flex; gap: 1rem; margin: 1rem 0; }
.header-social-link, .social-link {
  display: inline-flex; align-items: center; gap: 0.5rem;
  color: #60a5fa; text-decoration: none; font-size: 1.1rem;
  padding: 0.5rem 1rem; border-radius: 8px;
  background: rgba(59, 130, 246, 0.1); transition: all 0.3s ease;
}
.header-social-link:hover, .social-link:hover { background: rgba(59, 130, 246, 0.2); transform: translateY(-2px); }

.skills-title { font-size: 1.2em; font-weight: 700; margin: 1.5em 0 0.7em; color: #0ea5e9; }
.skill-item { margin-bottom: 1.2rem; transition: transform 0.3s ease; }
.skill-item:hover { transform: translateY(-2px); }
.skill-info { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.4rem; }
.skill-name { color: #e0e7ef; font-weight: 500; }
.skill-percentage { color: #60a5fa; font-size: 0.9rem; font-weight: 600; }
.skill-bar-bg {
  background: rgba(15, 23, 42, 0.6); border-radius: 999px; height: 8px; overflow: hidden;
  border: 1px solid rgba(59, 130, 246, 0.2);
}
.skill-bar-fill {
  height: 100%; background: linear-gradient(90deg, #0ea5e9, #6366f1);
  border-radius: 999px; position: relative; transition: all 0.3s ease;
}
.skill-bar-shine {
  position: absolute; top: 0; left: -100%; width: 100%; height: 100%;
  background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
  animation: shine 3s infinite;
}
@keyframes shine { 0% { left: -100%; } 20% { left: 100%; } 100% { left: 100%; } }

.card-section {
  background: rgba(255,255,255,0.07); border-radius: 1.5rem;
  box-shadow: 0 4px 24px rgba(0,0,0,0.12); padding: 2rem 2.5rem; margin-bottom: 2.5rem;
  backdrop-filter: blur(6px);
}
.section-header { font-size: 1.6rem; font-weight: 700; margin-bottom: 1.2rem; }
.sub-header { color: #60a5fa; margin: 1.5rem 0 0.5rem; }
.education-list, .certification-list { list-style: none; padding: 0; margin: 0; }
.education-item, .certification-item { padding: 0.4rem 0; color: #cbd5e1; }
.lottie-anim { width: 280px; height: 280px; margin: 1rem auto; }

.section-title-left { color: #e0e7ff; margin-bottom: 2rem; font-size: 2rem; font-weight: 600; }
.exp-section-grid {
  display: flex; flex-direction: row; overflow-x: auto; gap: 2.2rem;
  padding: 1rem 0 1.5rem; margin-bottom: 2.5rem; cursor: grab;
  scroll-snap-type: x mandatory; scrollbar-width: none;
}
.exp-section-grid::-webkit-scrollbar { display: none; }
.exp-section-grid.active { cursor: grabbing; }
.experience-card {
  flex: 0 0 420px; display: flex; align-items: flex-start; gap: 1.5rem;
  background: rgba(15, 23, 42, 0.95); border-radius: 12px;
  border-left: 6px solid; border-image: linear-gradient(to bottom, #0ea5e9, #6366f1) 1;
  padding: 1.5rem; scroll-snap-align: start; transition: all 0.3s ease;
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
}
.experience-card:hover { box-shadow: 0 4px 25px rgba(99, 102, 241, 0.15); transform: translateY(-2px); }
.briefcase-icon { font-size: 1.8rem; margin-top: 0.2rem; }
.card-content { flex: 1; }
.exp-title { color: #fff; font-size: 1.2rem; font-weight: 600; margin: 0 0 0.5rem 0; }
.exp-company-row { display: flex; align-items: center; gap: 1rem; margin-bottom: 0.8rem; flex-wrap: wrap; }
.exp-company { color: #60a5fa; font-weight: 500; }
.exp-period {
  background: linear-gradient(90deg, #6366f1 0%, #0ea5e9 100%); color: white;
  padding: 0.2rem 0.8rem; border-radius: 999px; font-size: 0.85rem; font-weight: 500;
}
.exp-details { color: #94a3b8; font-size: 0.95rem; line-height: 1.5; margin: 0; }

@keyframes floatUp { 0% { transform: translateY(0); } 50% { transform: translateY(-15px); } 100% { transform: translateY(0); } }
@keyframes floatDown { 0% { transform: translateY(0); } 50% { transform: translateY(15px); } 100% { transform: translateY(0); } }
.projects-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.project-card {
  background: rgba(17, 24, 39, 0.7); border-radius: 16px; backdrop-filter: blur(10px);
  border: 1px solid rgba(59, 130, 246, 0.2); padding: 2rem;
  box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37); transition: all 0.3s ease;
}
.project-card.float-up { animation: floatUp 6s ease-in-out infinite; }
.project-card.float-down { animation: floatDown 6s ease-in-out infinite; animation-delay: 0.5s; }
.project-card:hover { border-color: rgba(99, 102, 241, 0.8); transform: scale(1.02); }
.project-title { color: #e0e7ff; font-size: 1.5rem; font-weight: 600; margin-bottom: 0.75rem; }
.project-period {
  color: #60a5fa; font-size: 0.9rem; margin-bottom: 1rem; font-style: italic; display: inline-block;
  background: rgba(96, 165, 250, 0.1); padding: 0.3rem 0.8rem; border-radius: 9999px;
}
.project-description { color: #94a3b8; line-height: 1.6; white-space: pre-line; }

.contact-section {
  background: rgba(15, 23, 42, 0.95); border-radius: 16px;
  border: 1px solid rgba(59, 130, 246, 0.2); padding: 2.5rem; margin: 2rem 0;
}
.section-title { color: #e0e7ff; font-size: 2rem; font-weight: 600; margin-bottom: 2rem; text-align: center; }
.social-links { display: flex; justify-content: center; gap: 2rem; margin: 2rem 0; }
.contact-info-grid {
  display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 1.5rem; margin: 2rem 0;
}
.contact-info-item {
  display: flex; align-items: center; gap: 1rem; color: #94a3b8; padding: 1rem;
  background: rgba(255, 255, 255, 0.05); border-radius: 8px;
}
.contact-info-item a { color: inherit; }
.contact-info-item i { color: #60a5fa; font-size: 1.2rem; }
.site-footer { text-align: center; padding: 1rem 0 2rem; }

@media (max-width: 800px) {
  .hero, .projects-grid { grid-template-columns: 1fr; }
}
"#;

pub const DRAG_SCROLL_JS: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  const slider = document.querySelector('.exp-section-grid');
  if (!slider) return;
  let isDown = false;
  let startX;
  let scrollLeft;
  slider.addEventListener('mousedown', (e) => {
    isDown = true;
    slider.classList.add('active');
    startX = e.pageX - slider.offsetLeft;
    scrollLeft = slider.scrollLeft;
  });
  const release = () => {
    isDown = false;
    slider.classList.remove('active');
  };
  slider.addEventListener('mouseleave', release);
  slider.addEventListener('mouseup', release);
  slider.addEventListener('mousemove', (e) => {
    if (!isDown) return;
    e.preventDefault();
    const x = e.pageX - slider.offsetLeft;
    slider.scrollLeft = scrollLeft - (x - startX) * 1.2;
  });
});
"#;

pub const CONFETTI_JS: &str = r#"
window.addEventListener('load', function () {
  if (typeof confetti === 'function') {
    confetti({ particleCount: 150, spread: 80, origin: { y: 0.6 } });
  }
});
"#;

pub const LOTTIE_PLAYER_JS: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  const container = document.getElementById('hero-animation');
  const data = document.getElementById('hero-animation-data');
  if (!container || !data || typeof lottie === 'undefined') return;
  lottie.loadAnimation({
    container: container,
    renderer: 'svg',
    loop: true,
    autoplay: true,
    animationData: JSON.parse(data.textContent),
  });
});
"#;

/// Page background layered over the profile image.
pub fn background_css(data_uri: &str) -> String {
    format!(
        "body {{ background: linear-gradient(135deg, rgba(15, 23, 42, 0.97), rgba(30, 41, 59, 0.97), \
         rgba(49, 46, 129, 0.97)), url(\"{data_uri}\") no-repeat center center fixed; \
         background-size: cover; background-blend-mode: overlay; }}"
    )
}
