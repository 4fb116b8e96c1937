//! Promotion level lookups for the staff progress widget.

use crate::domain::booking::BookingStatus;
use crate::domain::promotion::{LevelProgress, level_for};
use crate::domain::types::AccountId;
use crate::repository::BookingReader;
use crate::services::ServiceResult;

/// Computes the account's level from its completed bookings.
pub fn load_promotion_level<R>(repo: &R, account_id: &str) -> ServiceResult<LevelProgress>
where
    R: BookingReader + ?Sized,
{
    let account_id = AccountId::new(account_id)?;

    let completed = repo
        .count_bookings_with_status(&account_id, &BookingStatus::Completed)
        .map_err(|err| {
            log::error!("Failed to count completed bookings: {err}");
            err
        })?;

    Ok(level_for(u32::try_from(completed).unwrap_or(u32::MAX)))
}

/// Records that the user dismissed the level-up notice.
///
/// Nothing is persisted; the notice state lives in the client.
pub fn acknowledge_promotion<R>(repo: &R, account_id: &str) -> ServiceResult<LevelProgress>
where
    R: BookingReader + ?Sized,
{
    let progress = load_promotion_level(repo, account_id)?;
    log::info!(
        "Account {account_id} acknowledged promotion level {}",
        progress.level
    );
    Ok(progress)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::promotion::PromotionLevel;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn level_is_derived_from_completed_count() {
        let mut repo = MockRepository::new();
        repo.expect_count_bookings_with_status()
            .withf(|account_id, status| {
                account_id.as_str() == "salon-1" && matches!(status, BookingStatus::Completed)
            })
            .times(1)
            .returning(|_, _| Ok(12));

        let progress = load_promotion_level(&repo, "salon-1").unwrap();

        assert_eq!(progress.completed_bookings, 12);
        assert_eq!(progress.level, PromotionLevel::Pro);
        assert_eq!(progress.next_level, Some(PromotionLevel::Senior));
        assert_eq!(progress.bookings_until_next, Some(18));
    }

    #[test]
    fn acknowledge_returns_current_level() {
        let mut repo = MockRepository::new();
        repo.expect_count_bookings_with_status()
            .returning(|_, _| Ok(75));

        let progress = acknowledge_promotion(&repo, "salon-1").unwrap();

        assert_eq!(progress.level, PromotionLevel::Elite);
        assert_eq!(progress.next_level, None);
    }

    #[test]
    fn repository_failure_is_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_count_bookings_with_status()
            .returning(|_, _| Err(RepositoryError::DatabaseError("locked".to_string())));

        assert!(matches!(
            load_promotion_level(&repo, "salon-1"),
            Err(ServiceError::Repository(_))
        ));
    }
}
