//! Site stylesheet
//!
//! Breakpoints: 640px (sm), 1024px (lg). Brand colours: navy #131E39,
//! teal #2EB2A4, orange #FD9340 -> #FC7003, yellow #FAE72B -> #F9B91B.

pub const STYLESHEET: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
body { font-family: var(--font-montserrat), sans-serif; color: #333; }
.antialiased { -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; }
img { display: block; max-width: 100%; }
.fill { position: absolute; inset: 0; width: 100%; height: 100%; }
.cover { object-fit: cover; }
.cover--left { object-position: left; }
.contain { object-fit: contain; }
.weight-bold { font-weight: 700; }
.weight-medium { font-weight: 500; }

.button {
  display: inline-block; width: fit-content; border-radius: 9999px;
  font-family: var(--font-outfit), sans-serif; font-weight: 600;
  letter-spacing: -0.02em; text-decoration: none;
  transition: box-shadow 150ms ease;
}
.button:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
.button:active { transform: scale(0.98); }
.button--yellow {
  margin-top: 2rem; padding: 1rem 2.5rem; font-size: 1.125rem; color: #333;
  font-family: inherit; background: linear-gradient(180deg, #FAE72B, #F9B91B);
}
.button--orange {
  margin-top: 1.5rem; padding: 0.875rem 2rem; font-size: 0.875rem; color: #fff;
  text-transform: uppercase; background: linear-gradient(180deg, #FD9340, #FC7003);
}
.button--white {
  margin-top: 1.5rem; padding: 0.875rem 2.5rem; font-size: 0.875rem;
  color: #2EB2A4; background: #fff; text-transform: uppercase;
}

/* Hero */
.hero { position: relative; width: 100%; background: #131E39; }
.hero__layout { display: flex; flex-direction: column; }
.hero__text { display: flex; flex: 1; align-items: center; padding: 4rem 1.5rem; }
.hero__copy { width: 100%; max-width: 28rem; margin: 0 auto; }
.hero__title {
  margin: 0; font-weight: 250; font-size: 2.25rem; line-height: 1.2;
  color: #D9D9D9; letter-spacing: -0.025em;
}
.hero__description { margin: 1.25rem 0 0; color: #fff; font-weight: 300; line-height: 1.5; }
.hero__media { position: relative; width: 100%; aspect-ratio: 940 / 729; }

/* Bright hero */
.bright-hero { position: relative; width: 100%; overflow: hidden; background: #fff; }
.bright-hero__canvas { position: relative; max-width: 1920px; min-height: 600px; margin: 0 auto; }
.bright-hero__blob { display: none; position: absolute; pointer-events: none; }
.bright-hero__portrait {
  position: relative; width: 280px; aspect-ratio: 704 / 832; margin: 2rem auto;
}
.bright-hero__content { position: relative; z-index: 10; padding: 0 1.5rem 3rem; }
.bright-hero__copy { max-width: 32rem; margin: 0 auto; text-align: center; }
.bright-hero__title {
  margin: 0; font-size: 1.875rem; font-weight: 600; line-height: 1.2; letter-spacing: -0.03em;
}
.bright-hero__subtitle { margin: 1.5rem 0 0; font-weight: 500; line-height: 1.4; letter-spacing: -0.03em; }
.bright-hero__reviews { margin-top: 1.5rem; }
.review-badge {
  display: inline-flex; align-items: center; gap: 1rem; padding: 0.5rem 2rem 0.5rem 1rem;
  border: 1px solid #f3f4f6; border-radius: 9999px; background: #fff;
  box-shadow: 0 6px 6px rgba(0, 0, 0, 0.06);
}
.review-badge__brand, .review-badge__rating { display: flex; align-items: center; gap: 0.375rem; }
.review-badge__caption { font-size: 0.75rem; font-weight: 500; letter-spacing: -0.02em; }
.review-badge__score { display: flex; flex-direction: column; align-items: flex-start; gap: 0.125rem; }
.review-badge__value { font-weight: 600; }
.review-badge__count { font-size: 8px; font-weight: 500; line-height: 1.25; }

/* Aberdeen hero */
.aberdeen-hero { position: relative; width: 100%; height: 500px; }
.aberdeen-hero__overlay { position: absolute; inset: 0; background: rgba(19, 30, 57, 0.34); }
.aberdeen-hero__fade {
  position: absolute; top: 0; left: 0; right: 0; height: 60%;
  background: linear-gradient(180deg, #131E39 0%, transparent 100%);
}
.aberdeen-hero__content {
  position: relative; z-index: 10; display: flex; flex-direction: column;
  justify-content: center; height: 100%; padding: 0 1.5rem;
}
.aberdeen-hero__title {
  margin: 0; font-family: var(--font-outfit), sans-serif; font-size: 1.875rem;
  font-weight: 500; line-height: 1; color: #fff;
}
.aberdeen-hero__subtitle {
  margin: 1rem 0 0; font-family: var(--font-outfit), sans-serif; font-weight: 500;
  line-height: 1.1; color: #fff;
}

/* Invisalign */
.invisalign { position: relative; width: 100%; }
.invisalign__card {
  position: relative; z-index: 20; margin: -120px 1rem 0; overflow: hidden;
  border-radius: 0.5rem 0.5rem 0 0; backdrop-filter: blur(28px);
  background: linear-gradient(180deg, rgba(46,178,164,0.85) 0%, rgba(46,178,164,1) 33%, rgba(46,178,164,1) 100%);
}
.invisalign__layout { display: flex; flex-direction: column; min-height: 400px; }
.invisalign__media-column { position: relative; width: 100%; }
.invisalign__media-stack { position: relative; height: 350px; }
.invisalign__media { position: absolute; inset: 0; transition: opacity 500ms ease; }
.invisalign__media.is-active { opacity: 1; }
.invisalign__media.is-hidden { opacity: 0; pointer-events: none; }
.invisalign__body {
  display: flex; flex-direction: column; justify-content: center;
  width: 100%; padding: 2.5rem 1.5rem;
}
.invisalign__tabs { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.invisalign__tab {
  padding: 0; border: 0; background: none; cursor: pointer; color: #fff;
  font-family: var(--font-outfit), sans-serif; font-size: 0.75rem; font-weight: 500;
  line-height: 1.5; text-transform: uppercase; opacity: 0.6; transition: opacity 150ms ease;
}
.invisalign__tab:hover { opacity: 0.8; }
.invisalign__tab.is-active { opacity: 1; }
.invisalign__title {
  margin: 1.5rem 0 0; font-family: var(--font-outfit), sans-serif;
  font-size: 1.5rem; line-height: 1; color: #fff;
}
.invisalign__description {
  margin: 1.25rem 0 0; font-family: var(--font-outfit), sans-serif;
  font-size: 0.875rem; line-height: 1.5; color: #fff;
}

.not-found { padding: 6rem 1.5rem; text-align: center; }

@media (min-width: 640px) {
  .hero__text { padding: 5rem 3rem; }
  .hero__title { font-size: 3rem; }
  .bright-hero__portrait { width: 340px; }
  .bright-hero__canvas { min-height: 700px; }
  .bright-hero__title { font-size: 2.25rem; }
  .aberdeen-hero { height: 600px; }
  .aberdeen-hero__content { padding: 0 3rem; }
  .aberdeen-hero__title { font-size: 3rem; }
  .aberdeen-hero__subtitle { font-size: 1.25rem; }
  .button--orange { padding: 1rem 2.5rem; font-size: 1rem; }
  .invisalign__card { margin: -120px 1.5rem 0; }
  .invisalign__media-stack { height: 450px; }
  .invisalign__body { padding: 2.5rem 3rem; }
  .invisalign__tab { font-size: 0.875rem; }
  .invisalign__title { font-size: 1.875rem; }
  .invisalign__description { font-size: 1rem; }
}

@media (min-width: 1024px) {
  .hero__layout { flex-direction: row; min-height: 729px; }
  .hero__text { padding: 0; }
  .hero__copy { max-width: 408px; margin: 0 0 0 308px; }
  .hero__title { font-size: 64px; letter-spacing: -0.02em; }
  .hero__media { width: 49%; aspect-ratio: auto; min-height: 729px; }
  .bright-hero__canvas { min-height: 856px; }
  .bright-hero__blob { display: block; }
  .bright-hero__blob--yellow { right: 0; top: 255px; width: 514px; }
  .bright-hero__blob--pink-blur { right: 100px; top: 162px; width: 807px; }
  .bright-hero__blob--pink { right: 267px; top: 244px; width: 697px; }
  .bright-hero__blob--yellow-left { left: -162px; top: 225px; width: 427px; }
  .bright-hero__portrait { position: absolute; right: 264px; top: 24px; width: 500px; margin: 0; }
  .bright-hero__content { padding: 0; }
  .bright-hero__copy { max-width: 528px; margin: 0 0 0 308px; padding-top: 369px; text-align: left; }
  .bright-hero__title { font-size: 48px; }
  .bright-hero__subtitle { font-size: 1.25rem; }
  .aberdeen-hero { height: 1032px; }
  .aberdeen-hero__content { padding: 0; }
  .aberdeen-hero__copy { max-width: 525px; margin-left: 308px; }
  .aberdeen-hero__title { font-size: 72px; }
  .aberdeen-hero__subtitle { margin-top: 1.5rem; font-size: 28px; }
  .button--orange { margin-top: 2.5rem; font-size: 20px; }
  .button--white { margin-top: 2.5rem; padding: 1rem 3rem; font-size: 1rem; }
  .invisalign__card { margin: -238px 126px 0; }
  .invisalign__layout { flex-direction: row; min-height: 800px; }
  .invisalign__media-column { width: 48%; }
  .invisalign__media-stack { position: absolute; inset: 0; height: auto; }
  .invisalign__body { width: 52%; padding: 4rem 4rem 4rem 2rem; }
  .invisalign__tabs { gap: 1.5rem; }
  .invisalign__tab { font-size: 14px; }
  .invisalign__title { margin-top: 2.5rem; font-size: 48px; }
  .invisalign__description { margin-top: 2rem; max-width: 408px; }
}

@media (min-width: 1280px) {
  .bright-hero__portrait { width: 560px; }
}
"#;
