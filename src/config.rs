use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // scroll engine registrations are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account values, supplied when the site is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub fn emailjs_credentials() -> Option<EmailJsCredentials> {
    Some(EmailJsCredentials {
        service_id: option_env!("EMAILJS_SERVICE_ID")?,
        template_id: option_env!("EMAILJS_TEMPLATE_ID")?,
        public_key: option_env!("EMAILJS_PUBLIC_KEY")?,
    })
}

pub const SCENE_URL: &str = "https://prod.spline.design/eu8ydTm5qMXIyxbH/scene.splinecode";
pub const SPLINE_VIEWER_SCRIPT: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/luigi-morandini-22307b34b/?locale=ja_JP";
pub const GITHUB_URL: &str = "https://github.com/Yukikaze-coder";
pub const CV_URL: &str = "https://flowcv.com/resume/8q0nsf6hqf40";
