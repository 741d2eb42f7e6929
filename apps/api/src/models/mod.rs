pub mod job;
pub mod profile;
pub mod proposal;

pub use job::Job;
pub use profile::{Profile, SalaryRange};
pub use proposal::{Proposal, ProposalStatus, WorkSample};
