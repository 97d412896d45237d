//! Static HTML pages.
//!
//! `GET /` is the page students use to register themselves. `GET /admin`
//! is the instructor's console: pick, roster, report, and reset. Both pages
//! are self-contained and talk to the JSON API with `fetch`.

use axum::response::Html;

const STYLE: &str = r"
    body {
        background: #0d1117;
        color: #c9d1d9;
        font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
        padding: 2rem;
        max-width: 720px;
        margin: 0 auto;
    }
    h1 { color: #58a6ff; margin-bottom: 0.25rem; }
    .subtitle { color: #8b949e; margin-top: 0; }
    input, button {
        font: inherit;
        padding: 0.5rem 0.75rem;
        border-radius: 6px;
        border: 1px solid #30363d;
        background: #161b22;
        color: #c9d1d9;
    }
    button { cursor: pointer; color: #58a6ff; }
    button.danger { color: #f85149; }
    .picked { color: #3fb950; font-size: 2rem; font-weight: bold; min-height: 2.5rem; }
    .error { color: #f85149; }
    table { border-collapse: collapse; width: 100%; margin-top: 0.5rem; }
    td, th { border-bottom: 1px solid #30363d; padding: 0.3rem 0.5rem; text-align: left; }
    hr { border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }
";

/// Serve the student registration page.
#[allow(clippy::unused_async)]
pub async fn index() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Rollcall</title>
    <style>{STYLE}</style>
</head>
<body>
    <h1>Rollcall</h1>
    <p class="subtitle">Add your name to today's list.</p>

    <form id="register">
        <input id="name" name="name" autocomplete="off" placeholder="Your name" autofocus>
        <button type="submit">Register</button>
    </form>
    <p id="status"></p>

    <script>
        const form = document.getElementById("register");
        const status = document.getElementById("status");
        form.addEventListener("submit", async (event) => {{
            event.preventDefault();
            const input = document.getElementById("name");
            const res = await fetch("/add_student", {{
                method: "POST",
                headers: {{ "Content-Type": "application/json" }},
                body: JSON.stringify({{ name: input.value }}),
            }});
            const body = await res.json();
            status.className = res.ok ? "" : "error";
            status.textContent = body.message || body.error;
            if (res.ok) input.value = "";
        }});
    </script>
</body>
</html>"#
    ))
}

/// Serve the instructor's admin console.
#[allow(clippy::unused_async)]
pub async fn admin() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Rollcall Admin</title>
    <style>{STYLE}</style>
</head>
<body>
    <h1>Rollcall Admin</h1>
    <p class="subtitle">Pick a student, review the session, start over.</p>

    <button id="pick">Pick a student</button>
    <button id="reset" class="danger">Reset session</button>
    <div id="picked" class="picked"></div>

    <hr>
    <h2>Students</h2>
    <table><thead><tr><th>Name</th><th>Picked</th></tr></thead><tbody id="students"></tbody></table>

    <h2>Report</h2>
    <table><thead><tr><th>Name</th><th>Time (UTC)</th></tr></thead><tbody id="report"></tbody></table>

    <script>
        function fill(id, rows) {{
            const body = document.getElementById(id);
            body.replaceChildren(...rows.map((cells) => {{
                const tr = document.createElement("tr");
                for (const cell of cells) {{
                    const td = document.createElement("td");
                    td.textContent = cell;
                    tr.appendChild(td);
                }}
                return tr;
            }}));
        }}

        async function refresh() {{
            const students = await (await fetch("/students")).json();
            fill("students", students.map((s) => [s.name, s.is_selected ? "yes" : ""]));
            const report = await (await fetch("/report")).json();
            fill("report", report.map((r) => [r.name, r.time]));
        }}

        document.getElementById("pick").addEventListener("click", async () => {{
            const body = await (await fetch("/pick_student")).json();
            document.getElementById("picked").textContent = body.selected || body.message;
            await refresh();
        }});

        document.getElementById("reset").addEventListener("click", async () => {{
            if (!confirm("Clear all picks for this session?")) return;
            await fetch("/reset", {{ method: "POST" }});
            document.getElementById("picked").textContent = "";
            await refresh();
        }});

        refresh();
    </script>
</body>
</html>"#
    ))
}
