use crate::shared::api_utils::api_url;
use contracts::domain::booking::BookingDataset;
use gloo_net::http::Request;

/// Fetch the bulk booking payload.
///
/// One document per call; every view derives everything it renders from
/// this snapshot.
pub async fn fetch_booking_dataset() -> Result<BookingDataset, String> {
    let url = api_url("/api/booking");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: BookingDataset = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
