use super::*;

helix_endpoints! {
    get_channel_stream_schedule(GetChannelStreamSchedule) => GET "schedule" {
        query {
            broadcaster_id: String,
            id: Option<Vec<String>>,
            start_time: Option<String>,
            utc_offset: Option<String>,
            first: Option<u32>,
            after: Option<String>,
        }
    }

    /// Update vacation settings. All values travel in the query string.
    update_channel_stream_schedule(UpdateChannelStreamSchedule) => PATCH "schedule/settings" {
        query {
            broadcaster_id: String,
            is_vacation_enabled: Option<bool>,
            vacation_start_time: Option<String>,
            vacation_end_time: Option<String>,
            timezone: Option<String>,
        }
    }

    create_channel_stream_schedule_segment(CreateChannelStreamScheduleSegment) => POST "schedule/segment" {
        query { broadcaster_id: String }
        body {
            start_time: String,
            timezone: String,
            is_recurring: bool,
            duration: Option<String>,
            category_id: Option<String>,
            title: Option<String>,
        }
    }

    update_channel_stream_schedule_segment(UpdateChannelStreamScheduleSegment) => PATCH "schedule/segment" {
        query { broadcaster_id: String, id: String }
        body {
            start_time: Option<String>,
            duration: Option<String>,
            category_id: Option<String>,
            title: Option<String>,
            is_canceled: Option<bool>,
            timezone: Option<String>,
        }
    }

    delete_channel_stream_schedule_segment(DeleteChannelStreamScheduleSegment) => DELETE "schedule/segment" {
        query { broadcaster_id: String, id: String }
    }
}
