//! 서버 렌더링 HTML 뷰
//!
//! 모든 페이지는 [`layout`]으로 감싸지며, 사용자 입력 값은 반드시
//! [`html_escape`]를 거쳐 출력됩니다.

pub mod pages;

use crate::domain::models::session::{Flash, FlashKind};

/// 공통 레이아웃
pub fn layout(title: &str, authenticated: bool, flashes: &[Flash], body: &str) -> String {
    let nav = if authenticated {
        r#"<a href="/dashboard">Dashboard</a> <a href="/add-note">Add Note</a> <a href="/my-notes">My Notes</a> <a href="/logout">Logout</a>"#
    } else {
        r#"<a href="/">Home</a> <a href="/login">Login</a> <a href="/register">Register</a>"#
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav>{nav}</nav>
<main>
{flashes}{body}
</main>
</body>
</html>
"#,
        title = html_escape(title),
        nav = nav,
        flashes = render_flashes(flashes),
        body = body,
    )
}

fn render_flashes(flashes: &[Flash]) -> String {
    flashes
        .iter()
        .map(|flash| {
            let class = match flash.kind {
                FlashKind::Success => "flash flash-success",
                FlashKind::Error => "flash flash-error",
            };
            format!("<p class=\"{}\">{}</p>\n", class, html_escape(&flash.message))
        })
        .collect()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
