pub mod completion;
pub mod resumes;
