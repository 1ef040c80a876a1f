//! Page script for the Invisalign tabs
//!
//! The script keeps no state of its own. A click asks the host to select
//! the tab and then applies the snapshot it gets back.

pub const SWITCHER_SCRIPT: &str = r#"
(() => {
  const section = document.querySelector('[data-component="invisalign"]');
  const invoke = window.__TAURI__ && window.__TAURI__.core && window.__TAURI__.core.invoke;
  if (!section || !invoke) return;

  const apply = (snapshot) => {
    snapshot.tabs.forEach((entry) => {
      const active = entry.visibility === 'active';
      const id = CSS.escape(entry.id);
      const tab = section.querySelector(`button[data-tab-id="${id}"]`);
      if (tab) {
        tab.classList.toggle('is-active', active);
        tab.setAttribute('aria-selected', active ? 'true' : 'false');
      }
      const media = section.querySelector(`.invisalign__media[data-tab-id="${id}"]`);
      if (media) {
        media.classList.toggle('is-active', active);
        media.classList.toggle('is-hidden', !active);
        media.toggleAttribute('inert', !active);
        if (active) {
          media.removeAttribute('aria-hidden');
        } else {
          media.setAttribute('aria-hidden', 'true');
        }
      }
    });
  };

  section.addEventListener('click', async (event) => {
    const button = event.target.closest('button[data-tab-index]');
    if (!button) return;
    const result = await invoke('select_invisalign_tab', {
      index: Number(button.dataset.tabIndex),
    });
    if (result && result.success) {
      apply(result.data);
    } else if (result) {
      console.warn('tab selection rejected:', result.error);
    }
  });

  invoke('frontend_ready');
})();
"#;
