use super::*;

helix_endpoints! {
    get_code_status(GetCodeStatus) => GET "entitlements/codes" {
        query { code: Option<Vec<String>>, user_id: Option<u64> }
    }

    get_drops_entitlements(GetDropsEntitlements) => GET "entitlements/drops" {
        query {
            id: Option<String>,
            user_id: Option<String>,
            game_id: Option<String>,
            fulfillment_status: Option<String>,
            after: Option<String>,
            first: Option<u32>,
        }
    }

    /// Mark drops entitlements as claimed or fulfilled.
    update_drops_entitlements(UpdateDropsEntitlements) => PATCH "entitlements/drops" {
        query {}
        body {
            entitlement_ids: Option<Vec<String>>,
            fulfillment_status: Option<String>,
        }
    }

    redeem_code(RedeemCode) => POST "entitlements/codes" {
        query { code: Option<Vec<String>>, user_id: Option<u64> }
    }
}
