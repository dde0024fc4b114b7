//! Data-fetch collaborator boundary for the timecard viewer.
//!
//! The viewer never talks to the network itself: it depends on a
//! [`TimecardsApi`] implementation supplied by the application. The
//! orchestration in [`load_timecard_employees`] wraps one fetch in the
//! store's action protocol: a start action, then exactly one terminal
//! action once the fetch resolves.

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ViewerResult;
use crate::models::{DateRange, TimecardEmployee};
use crate::store::{Store, TimecardEmployeesAction};

/// The data-fetch collaborator.
///
/// Implementations fetch the timecard employees whose hours fall between
/// two date keys (inclusive, `YYYY-MM-DD`). Failures are ordinary
/// [`ViewerError`] values: callers branch on the `Result`, nothing is
/// thrown.
///
/// [`ViewerError`]: crate::error::ViewerError
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use timecards_viewer::client::TimecardsApi;
/// use timecards_viewer::error::ViewerResult;
/// use timecards_viewer::models::TimecardEmployee;
///
/// struct EmptyApi;
///
/// #[async_trait]
/// impl TimecardsApi for EmptyApi {
///     async fn get_timecard_employees(
///         &self,
///         _start_date: &str,
///         _end_date: &str,
///     ) -> ViewerResult<Vec<TimecardEmployee>> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait TimecardsApi: Send + Sync {
    /// Fetches the timecard employees for an inclusive date-key range.
    async fn get_timecard_employees(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ViewerResult<Vec<TimecardEmployee>>;
}

/// Fetches timecard employees for a range and applies the outcome to the
/// store.
///
/// Dispatches the start action, converts the range to its date keys for
/// the collaborator, then dispatches exactly one terminal action: complete
/// with the payload on success, error on failure. The error action carries
/// no payload; failure details go to the log under this invocation's
/// correlation id.
///
/// # Example
///
/// ```no_run
/// use timecards_viewer::client::{TimecardsApi, load_timecard_employees};
/// use timecards_viewer::config::ViewerConfig;
/// use timecards_viewer::store::Store;
/// use chrono::Utc;
///
/// # async fn run(api: impl TimecardsApi) {
/// let today = Utc::now().date_naive();
/// let mut store = Store::initial(&ViewerConfig::default(), today);
/// let range = store.settings.timecard_date_range;
///
/// load_timecard_employees(&api, &mut store, &range).await;
/// println!("{} employees", store.timecard_employees.employees.len());
/// # }
/// ```
pub async fn load_timecard_employees<A>(api: &A, store: &mut Store, range: &DateRange)
where
    A: TimecardsApi + ?Sized,
{
    let correlation_id = Uuid::new_v4();
    let (start_date, end_date) = range.date_keys();

    info!(
        correlation_id = %correlation_id,
        start_date = %start_date,
        end_date = %end_date,
        "Fetching timecard employees"
    );
    store.dispatch(TimecardEmployeesAction::FetchStart.into());

    match api.get_timecard_employees(&start_date, &end_date).await {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                employee_count = employees.len(),
                "Timecard employees fetched"
            );
            store.dispatch(TimecardEmployeesAction::FetchComplete(employees).into());
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timecard employee fetch failed"
            );
            store.dispatch(TimecardEmployeesAction::FetchError.into());
        }
    }
}
