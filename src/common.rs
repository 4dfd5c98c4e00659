use std::io::Write;

pub const LOGIN_URL: &str = "http://localhost:5000/api/auth/login";
pub const LOGIN: &str = "admin@example.com";
pub const PASSWORD: &str = "admin123";

pub const START_HINT: &str = "Make sure to run: npm start (in the server directory)";

// Console writes are best effort, a probe has nowhere else to report to.
pub fn line(w: &mut impl Write, s: &str) {
    let _ = writeln!(w, "{}", s);
}

pub fn success(w: &mut impl Write) {
    line(w, "✅ Login successful!");
}

pub fn failure(w: &mut impl Write) {
    line(w, "❌ Login failed!");
}
