//! Embedded HTML pages.
//!
//! # Responsibilities
//! - Render the mock login form, optionally with an error banner
//! - Render the post-submission disclosure page
//! - Render the 404 page
//!
//! # Design Decisions
//! - Pages are compiled-in string templates; a template engine would be
//!   overkill for three static pages with one substitution slot
//! - Error messages come only from our own validator, never from user
//!   input, so the substitution needs no escaping
//! - Every page carries the training disclaimer; the form never imitates
//!   a real brand

/// Marker replaced with the error banner (or nothing) at render time.
const ERROR_SLOT: &str = "<!--ERROR-->";

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PhotoShare - Sign In</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh; display: flex; flex-direction: column;
        }
        .warning-banner {
            background-color: #dc3545; color: white; text-align: center;
            padding: 10px; font-weight: bold; font-size: 14px;
        }
        .container { flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px; }
        .login-box {
            background: white; padding: 40px; border-radius: 10px;
            box-shadow: 0 8px 32px rgba(0,0,0,0.1); width: 100%; max-width: 400px;
        }
        .logo { text-align: center; margin-bottom: 30px; }
        .logo h1 { color: #333; font-size: 32px; font-weight: 300; letter-spacing: -1px; }
        .logo p { color: #666; font-size: 14px; margin-top: 5px; }
        .form-group { margin-bottom: 20px; }
        .form-group label { display: block; margin-bottom: 5px; color: #333; font-weight: 500; }
        .form-group input {
            width: 100%; padding: 12px; border: 1px solid #ddd;
            border-radius: 5px; font-size: 16px;
        }
        .form-options {
            display: flex; justify-content: space-between; align-items: center;
            margin-bottom: 25px; font-size: 14px;
        }
        .remember-me { display: flex; align-items: center; gap: 5px; }
        .login-btn {
            width: 100%; padding: 12px; color: white; border: none; border-radius: 5px;
            font-size: 16px; font-weight: 500; cursor: pointer;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        }
        .error-message {
            background-color: #f8d7da; color: #721c24; padding: 10px;
            border-radius: 5px; margin-bottom: 15px; font-size: 14px;
        }
        .footer { text-align: center; padding: 20px; color: white; font-size: 12px; opacity: 0.8; }
    </style>
</head>
<body>
    <div class="warning-banner">
        &#9888; This page is for security-awareness training only. Never enter real credentials. &#9888;
    </div>
    <div class="container">
        <div class="login-box">
            <div class="logo">
                <h1>PhotoShare</h1>
                <p>Share your photos</p>
            </div>
            <!--ERROR-->
            <form method="POST" action="/login">
                <div class="form-group">
                    <label for="username">Username</label>
                    <input type="text" id="username" name="username" required
                           minlength="3" maxlength="32"
                           placeholder="Enter your username">
                </div>
                <div class="form-group">
                    <label for="password">Password</label>
                    <input type="password" id="password" name="password" required
                           minlength="3" maxlength="128"
                           placeholder="Enter your password">
                </div>
                <div class="form-options">
                    <div class="remember-me">
                        <input type="checkbox" id="remember" name="remember" value="1">
                        <label for="remember">Remember me</label>
                    </div>
                </div>
                <button type="submit" class="login-btn">Sign In</button>
            </form>
        </div>
    </div>
    <div class="footer">
        PhotoShare demo - training use only
    </div>
</body>
</html>
"#;

pub const THANKS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Training Complete - PhotoShare</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #28a745 0%, #20c997 100%);
            min-height: 100vh; display: flex; flex-direction: column;
            align-items: center; justify-content: center; color: white;
            text-align: center; padding: 20px;
        }
        .success-container {
            background: rgba(255,255,255,0.1); padding: 40px;
            border-radius: 15px; max-width: 600px;
        }
        h1 { font-size: 28px; margin-bottom: 15px; font-weight: 300; }
        p { font-size: 16px; line-height: 1.6; margin-bottom: 15px; opacity: 0.9; }
        .info-box {
            background: rgba(255,255,255,0.1); padding: 20px;
            border-radius: 10px; margin: 20px 0; text-align: left;
        }
        .info-box h3 { margin-bottom: 10px; }
        .info-box ul { list-style-type: none; padding-left: 0; }
        .info-box li { margin-bottom: 5px; }
        .back-btn {
            display: inline-block; margin-top: 20px; padding: 12px 24px;
            background: rgba(255,255,255,0.2); color: white;
            text-decoration: none; border-radius: 25px;
        }
    </style>
</head>
<body>
    <div class="success-container">
        <h1>This was a phishing simulation</h1>
        <p>The form you just submitted was part of a security-awareness
           exercise. No real account was involved.</p>
        <div class="info-box">
            <h3>What was captured:</h3>
            <ul>
                <li>&#10003; Timestamp (UTC)</li>
                <li>&#10003; Client IP address</li>
                <li>&#10003; Browser details (User-Agent)</li>
                <li>&#10003; Referrer</li>
                <li>&#10003; Language preferences</li>
                <li>&#10003; HTTP headers</li>
                <li>&#10003; The submitted username and password</li>
                <li>&#10003; Remote port</li>
            </ul>
        </div>
        <p><strong>Note:</strong> This data exists only for the training
           exercise and is stored in the local capture log.</p>
        <p><strong>Takeaway:</strong> a convincing page is easy to fake.
           Check the address bar before signing in anywhere.</p>
        <a href="/login" class="back-btn">Try again</a>
    </div>
</body>
</html>
"#;

pub const NOT_FOUND_PAGE: &str = "<h1>404 - Page Not Found</h1>\
    <p>This is a security-awareness training demo.</p>";

/// Render the login form, with the error banner filled in when present.
pub fn render_login(error: Option<&str>) -> String {
    match error {
        Some(message) => LOGIN_PAGE.replace(
            ERROR_SLOT,
            &format!("<div class=\"error-message\">{}</div>", message),
        ),
        None => LOGIN_PAGE.replace(ERROR_SLOT, ""),
    }
}
