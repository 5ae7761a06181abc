// Resume screening: text extraction, normalization, skill matching, role
// prediction and ATS scoring. Everything here is a pure function of one
// upload plus the immutable tables in AppState.

pub mod ats;
pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod predictor;
pub mod report;
pub mod resources;
pub mod role_scoring;
pub mod skills;
pub mod stopwords;
