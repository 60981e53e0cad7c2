use super::*;

helix_endpoints! {
    get_channel_teams(GetChannelTeams) => GET "teams/channel" {
        query { broadcaster_id: String }
    }

    get_teams(GetTeams) => GET "teams" {
        query { name: Option<String>, id: Option<String> }
    }
}
