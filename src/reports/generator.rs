use super::PollReport;
use crate::model::PollState;
use chrono::Utc;

pub fn generate_report(state: &PollState) -> PollReport {
    PollReport {
        poll_id: state.poll_id.clone(),
        question: state.question.clone(),
        round: state.round,
        status: state.status,
        participant_count: state.candidates.len(),
        progress: state.progress(),
        results: state.results(),
        generated_at: Utc::now(),
    }
}
