pub(crate) const PAGE_STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #e0e5ec; color: #333; display: flex; flex-direction: column; min-height: 100vh; }
.container { flex: 1; max-width: 640px; width: 100%; margin: 0 auto; padding: 2rem 1rem; box-sizing: border-box; }
h1 { text-align: center; }
form { display: flex; flex-direction: column; gap: 1rem; }
label { display: flex; flex-direction: column; gap: .5rem; font-weight: 600; }
input, select { padding: .75rem; border: none; border-radius: 10px; background: #e0e5ec; box-shadow: inset 4px 4px 8px #b8bec7, inset -4px -4px 8px #fff; }
button { padding: .75rem; border: none; border-radius: 10px; background: #e0e5ec; box-shadow: 4px 4px 8px #b8bec7, -4px -4px 8px #fff; font-weight: 600; cursor: pointer; }
button:disabled { opacity: .6; cursor: wait; }
.error-message { margin-top: 1rem; padding: .75rem; border-radius: 10px; color: #b00020; background: #fde8ec; }
.result-container { margin-top: 1.5rem; display: grid; gap: 1rem; }
.card { border-radius: 15px; background: #e0e5ec; box-shadow: 6px 6px 12px #b8bec7, -6px -6px 12px #fff; }
.card-header { margin: 0; padding: 1rem; font-size: 1.1rem; border-bottom: 1px solid #cdd3db; }
.card-content { padding: 1rem; }
.status.valid { color: #1b7f3b; }
.status.invalid, .status.error, .error { color: #b00020; }
.explorer-link { color: #2a5db0; text-decoration: none; font-weight: 600; }
.external-link-icon { margin-left: .25rem; }
.footer { padding: 1rem; text-align: center; }
.social-links { display: flex; justify-content: center; gap: 1rem; margin-top: .5rem; }
.neumorphic-icon { color: #555; text-decoration: none; }
"#;
