//! 페이지별 본문

use crate::domain::entities::users::{Note, User};
use crate::domain::models::session::Flash;
use crate::views::{html_escape, layout};

pub fn home(authenticated: bool, flashes: &[Flash]) -> String {
    let body = r#"<h1>Notes</h1>
<p>Keep short notes tied to your account.</p>
<p><a href="/register">Create an account</a> or <a href="/login">log in</a>.</p>"#;
    layout("Notes", authenticated, flashes, body)
}

pub fn login(flashes: &[Flash]) -> String {
    let body = format!(
        r#"<h1>Login</h1>
{form}
<p><a href="/auth/google">Sign in with Google</a></p>
<p>No account? <a href="/register">Register</a></p>"#,
        form = credentials_form("/login", "Login"),
    );
    layout("Login", false, flashes, &body)
}

pub fn register(flashes: &[Flash]) -> String {
    let body = format!(
        r#"<h1>Register</h1>
{form}
<p><a href="/auth/google">Sign up with Google</a></p>
<p>Already registered? <a href="/login">Login</a></p>"#,
        form = credentials_form("/register", "Register"),
    );
    layout("Register", false, flashes, &body)
}

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label>Email <input type="email" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">{submit}</button>
</form>"#
    )
}

pub fn dashboard(user: &User, flashes: &[Flash]) -> String {
    let body = format!(
        r#"<h1>Dashboard</h1>
<p>Welcome, {email}!</p>
<p>You have {count} note(s).</p>
<p><a href="/add-note">Add a note</a> | <a href="/my-notes">View my notes</a></p>"#,
        email = html_escape(&user.email),
        count = user.notes.len(),
    );
    layout("Dashboard", true, flashes, &body)
}

pub fn add_note(flashes: &[Flash]) -> String {
    let body = r#"<h1>Add Note</h1>
<form method="post" action="/add-note">
<label>Title <input type="text" name="title" maxlength="200" required></label>
<label>Content <textarea name="content" maxlength="10000"></textarea></label>
<button type="submit">Save</button>
</form>"#;
    layout("Add Note", true, flashes, body)
}

pub fn my_notes(notes: &[Note], flashes: &[Flash]) -> String {
    let body = if notes.is_empty() {
        r#"<h1>My Notes</h1>
<p>No notes yet. <a href="/add-note">Add one</a>.</p>"#
            .to_string()
    } else {
        let items: String = notes.iter().map(note_item).collect();
        format!("<h1>My Notes</h1>\n<ul>\n{items}</ul>")
    };
    layout("My Notes", true, flashes, &body)
}

fn note_item(note: &Note) -> String {
    format!(
        r#"<li>
<h2>{title}</h2>
<p>{content}</p>
<form method="post" action="/delete-note">
<input type="hidden" name="noteId" value="{id}">
<button type="submit">Delete</button>
</form>
</li>
"#,
        title = html_escape(&note.title),
        content = html_escape(&note.content),
        id = note.id_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_my_notes_escapes_and_links_delete() {
        let note = Note::new("<i>t</i>".to_string(), "a & b".to_string());

        let html = my_notes(std::slice::from_ref(&note), &[]);

        assert!(html.contains("&lt;i&gt;t&lt;/i&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains(&format!(r#"name="noteId" value="{}""#, note.id_string())));
    }

    #[test]
    fn test_my_notes_empty() {
        assert!(my_notes(&[], &[]).contains("No notes yet."));
    }

    #[test]
    fn test_login_form_fields() {
        let html = login(&[]);

        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="password""#));
    }
}
