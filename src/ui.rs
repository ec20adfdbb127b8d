pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Journal Planner</title>
  <style>
    :root {
      --bg: #f1f0ec;
      --card: #ffffff;
      --panel: #d1d5db;
      --ink: #1f2937;
      --muted: #4b5563;
      --accent: #60a5fa;
      --accent-hover: #2563eb;
      --danger: #ef4444;
    }

    :root.dark {
      --bg: #1f2937;
      --card: #374151;
      --panel: #4b5563;
      --ink: #f9fafb;
      --muted: #d1d5db;
      --accent: #334155;
      --accent-hover: #0f172a;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
    }

    nav {
      display: flex;
      gap: 16px;
      align-items: center;
      padding: 16px 24px;
      background: var(--accent);
      color: #fff;
    }

    nav h1 {
      margin: 0 auto 0 0;
      font-size: 1.3rem;
    }

    nav button {
      background: transparent;
      border: 1px solid rgba(255, 255, 255, 0.6);
      color: #fff;
      border-radius: 6px;
      padding: 8px 14px;
      cursor: pointer;
    }

    main {
      width: min(760px, 100%);
      margin: 0 auto;
      padding: 24px 16px 48px;
      display: grid;
      gap: 20px;
    }

    section.panel {
      background: var(--panel);
      border-radius: 8px;
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    input,
    textarea {
      width: 100%;
      padding: 10px;
      border-radius: 6px;
      border: none;
      font: inherit;
      color: #111827;
    }

    label {
      font-weight: 600;
      color: var(--muted);
      display: grid;
      gap: 4px;
    }

    .primary {
      background: var(--accent);
      color: #fff;
      border: none;
      border-radius: 6px;
      padding: 12px;
      font-weight: 600;
      cursor: pointer;
    }

    .primary:hover {
      background: var(--accent-hover);
    }

    .entry {
      background: var(--card);
      border-radius: 8px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .entry h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .entry p {
      margin: 0;
      white-space: pre-wrap;
    }

    .entry .dates {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .entry .actions {
      display: flex;
      gap: 8px;
    }

    .entry .actions button {
      border: none;
      border-radius: 6px;
      padding: 6px 12px;
      cursor: pointer;
      color: #fff;
      background: var(--accent);
    }

    .entry .actions button.delete {
      background: var(--danger);
    }

    .status {
      min-height: 20px;
      font-size: 0.9rem;
      color: var(--danger);
    }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <nav>
    <h1>Journal Planner</h1>
    <button id="show-entries" type="button">All Entries</button>
    <button id="show-new" type="button">New Entry</button>
    <button id="show-settings" type="button">Settings</button>
  </nav>

  <main>
    <section id="new-entry" class="panel" hidden>
      <input id="draft-title" type="text" placeholder="Title" name="title" />
      <textarea id="draft-description" placeholder="Description" name="description"></textarea>
      <label>
        Created At:
        <input id="draft-created" type="date" name="created_at" />
      </label>
      <label>
        Scheduled Date:
        <input id="draft-scheduled" type="date" name="scheduled_date" />
      </label>
      <button id="create" class="primary" type="button">Create</button>
    </section>

    <section id="settings" class="panel" hidden>
      <h2>Settings</h2>
      <button id="toggle-dark" class="primary" type="button"></button>
    </section>

    <div class="status" id="status" role="status"></div>
    <section id="entries"></section>
  </main>

  <script>
    const state = {
      entries: [],
      darkMode: localStorage.getItem("darkMode") === "true",
    };

    const statusEl = document.getElementById("status");
    const entriesEl = document.getElementById("entries");
    const views = {
      entries: entriesEl,
      new: document.getElementById("new-entry"),
      settings: document.getElementById("settings"),
    };

    const today = () => new Date().toISOString().split("T")[0];
    const dateOnly = (value) => new Date(value).toISOString().split("T")[0];

    function applyTheme() {
      document.documentElement.classList.toggle("dark", state.darkMode);
      document.getElementById("toggle-dark").textContent = state.darkMode
        ? "Disable Dark Mode"
        : "Enable Dark Mode";
    }

    function toggleDarkMode() {
      state.darkMode = !state.darkMode;
      localStorage.setItem("darkMode", String(state.darkMode));
      applyTheme();
    }

    function show(view) {
      Object.entries(views).forEach(([name, el]) => {
        el.hidden = name !== view;
      });
      statusEl.textContent = "";
    }

    async function request(method, path, body) {
      const res = await fetch(path, {
        method,
        headers: body ? { "Content-Type": "application/json" } : {},
        body: body ? JSON.stringify(body) : undefined,
      });
      const data = await res.json();
      if (!res.ok) {
        throw new Error(data.msg || `Request failed (${res.status})`);
      }
      return data;
    }

    function blankDraft() {
      document.getElementById("draft-title").value = "";
      document.getElementById("draft-description").value = "";
      document.getElementById("draft-created").value = today();
      document.getElementById("draft-scheduled").value = today();
    }

    function readDraft() {
      return {
        title: document.getElementById("draft-title").value,
        description: document.getElementById("draft-description").value,
        created_at: document.getElementById("draft-created").value,
        scheduled_date: document.getElementById("draft-scheduled").value,
      };
    }

    function writeDraft(draft) {
      document.getElementById("draft-title").value = draft.title;
      document.getElementById("draft-description").value = draft.description;
      document.getElementById("draft-created").value = draft.created_at;
      document.getElementById("draft-scheduled").value = draft.scheduled_date;
    }

    async function saveEntry() {
      const draft = readDraft();
      blankDraft();
      try {
        const created = await request("POST", "/create/", draft);
        state.entries = [...state.entries, created];
        render();
        show("entries");
      } catch (err) {
        writeDraft(draft);
        statusEl.textContent = err.message;
      }
    }

    async function updateEntry(id, changes) {
      try {
        await request("PUT", `/update/${encodeURIComponent(id)}`, changes);
        const fresh = await request("GET", `/get/${encodeURIComponent(id)}`);
        state.entries = state.entries.map((entry) => (entry.id === id ? fresh : entry));
        render();
      } catch (err) {
        statusEl.textContent = err.message;
      }
    }

    async function deleteEntry(id) {
      try {
        await request("DELETE", `/delete/${encodeURIComponent(id)}`);
        state.entries = state.entries.filter((entry) => entry.id !== id);
        render();
      } catch (err) {
        statusEl.textContent = err.message;
      }
    }

    function entryCard(entry) {
      const card = document.createElement("article");
      card.className = "entry";

      const title = document.createElement("h2");
      title.textContent = entry.title;
      const description = document.createElement("p");
      description.textContent = entry.description;
      const dates = document.createElement("div");
      dates.className = "dates";
      dates.textContent = `Scheduled ${dateOnly(entry.scheduled_date)} · Created ${dateOnly(entry.created_at)}`;

      const actions = document.createElement("div");
      actions.className = "actions";
      const edit = document.createElement("button");
      edit.type = "button";
      edit.textContent = "Edit";
      edit.addEventListener("click", () => editCard(card, entry));
      const remove = document.createElement("button");
      remove.type = "button";
      remove.className = "delete";
      remove.textContent = "Delete";
      remove.addEventListener("click", () => deleteEntry(entry.id));
      actions.append(edit, remove);

      card.append(title, description, dates, actions);
      return card;
    }

    function editCard(card, entry) {
      card.replaceChildren();
      const title = document.createElement("input");
      title.value = entry.title;
      const description = document.createElement("textarea");
      description.value = entry.description;
      const scheduled = document.createElement("input");
      scheduled.type = "date";
      scheduled.value = dateOnly(entry.scheduled_date);

      const actions = document.createElement("div");
      actions.className = "actions";
      const save = document.createElement("button");
      save.type = "button";
      save.textContent = "Save";
      save.addEventListener("click", () =>
        updateEntry(entry.id, {
          title: title.value,
          description: description.value,
          scheduled_date: scheduled.value,
          created_at: entry.created_at,
        })
      );
      const cancel = document.createElement("button");
      cancel.type = "button";
      cancel.textContent = "Cancel";
      cancel.addEventListener("click", render);
      actions.append(save, cancel);

      card.append(title, description, scheduled, actions);
    }

    function render() {
      entriesEl.replaceChildren(...state.entries.map(entryCard));
      entriesEl.style.display = "grid";
      entriesEl.style.gap = "14px";
    }

    async function init() {
      applyTheme();
      blankDraft();
      try {
        state.entries = await request("GET", "/get/");
        render();
      } catch (err) {
        statusEl.textContent = err.message;
      }
    }

    document.getElementById("show-entries").addEventListener("click", () => show("entries"));
    document.getElementById("show-new").addEventListener("click", () => show("new"));
    document.getElementById("show-settings").addEventListener("click", () => show("settings"));
    document.getElementById("toggle-dark").addEventListener("click", toggleDarkMode);
    document.getElementById("create").addEventListener("click", saveEntry);

    init();
  </script>
</body>
</html>
"#;
