use super::*;

helix_endpoints! {
    get_polls(GetPolls) => GET "polls" {
        query {
            broadcaster_id: String,
            id: Option<Vec<String>>,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    /// Start a poll. Each choice is sent as a `{"title": ..}` object.
    create_poll(CreatePoll) => POST "polls" {
        query {}
        body {
            broadcaster_id: String,
            title: String,
            choices: Vec<PollChoice>,
            duration: u32,
            bits_voting_enabled: Option<bool>,
            bits_per_vote: Option<u32>,
            channel_points_voting_enabled: Option<bool>,
            channel_points_per_vote: Option<u32>,
        }
    }

    /// End a poll, either `TERMINATED` or `ARCHIVED`.
    end_poll(EndPoll) => PATCH "polls" {
        query {}
        body {
            broadcaster_id: String,
            id: String,
            status: String,
        }
    }

    get_predictions(GetPredictions) => GET "predictions" {
        query {
            broadcaster_id: String,
            id: Option<Vec<String>>,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    create_prediction(CreatePrediction) => POST "predictions" {
        query {}
        body {
            broadcaster_id: String,
            title: String,
            outcomes: Vec<PredictionOutcome>,
            prediction_window: u32,
        }
    }

    /// Resolve, cancel or lock a prediction.
    end_prediction(EndPrediction) => PATCH "predictions" {
        query {}
        body {
            broadcaster_id: String,
            id: String,
            status: String,
            winning_outcome_id: Option<String>,
        }
    }
}
