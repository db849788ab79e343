//! Manual re-ranking of carousel banners from the admin table.

use contracts::domain::a006_banner::aggregate::{Banner, BannerOrder, ReorderRequest};
use contracts::domain::common::EntityId;
use leptos::task::spawn_local;

use super::api::RankApi;
use crate::shared::admin::{AdminController, AdminHandle, AdminState, ResourceApi, StateCell};
use crate::shared::notifications::Notifier;

const REORDER_FAILED: &str = "Error al reordenar los banners";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Swap of `orden` between a banner and its neighbour in displayed order.
///
/// `None` at the boundaries (first moved up, last moved down) or when the id
/// is unknown.
pub fn plan_swap(items: &[Banner], id: EntityId, direction: MoveDirection) -> Option<ReorderRequest> {
    let index = items.iter().position(|b| b.id == Some(id))?;
    let neighbour = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => Some(index + 1).filter(|n| *n < items.len())?,
    };

    let current = items[index].order_entry()?;
    let other = items[neighbour].order_entry()?;
    Some(ReorderRequest {
        ordenes: vec![
            BannerOrder {
                orden: other.orden,
                ..current
            },
            BannerOrder {
                orden: current.orden,
                ..other
            },
        ],
    })
}

impl<A, S, N> AdminController<Banner, A, S, N>
where
    A: ResourceApi<Banner> + RankApi + 'static,
    S: StateCell<AdminState<Banner>>,
    N: Notifier + Clone + 'static,
{
    /// Moves a banner one slot and reloads. No-op at the boundaries.
    pub async fn reorder(&self, id: EntityId, direction: MoveDirection) -> bool {
        let Some(request) = self.state.peek(|s| plan_swap(&s.items, id, direction)) else {
            log::debug!("Banner {} ya está en el extremo ({:?})", id, direction);
            return false;
        };

        match self.api.reorder(&request).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                log::error!("Error reordenando banners: {}", e);
                self.notifier.error(REORDER_FAILED);
                false
            }
        }
    }
}

impl AdminHandle<Banner> {
    pub fn reorder(&self, id: EntityId, direction: MoveDirection) {
        let controller = self.controller();
        spawn_local(async move {
            controller.reorder(id, direction).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::admin::controller::tests::{controller, Call, FakeApi, RecordingNotifier};
    use crate::shared::admin::Payload;
    use crate::shared::http::ApiError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn banner(id: EntityId, orden: i32) -> Banner {
        Banner {
            id: Some(id),
            orden,
            ..Banner::default()
        }
    }

    fn sample() -> Vec<Banner> {
        vec![banner(10, 0), banner(11, 1), banner(12, 2)]
    }

    #[test]
    fn test_boundaries_are_noop() {
        let items = sample();
        assert_eq!(plan_swap(&items, 10, MoveDirection::Up), None);
        assert_eq!(plan_swap(&items, 12, MoveDirection::Down), None);
        assert_eq!(plan_swap(&items, 99, MoveDirection::Down), None);
    }

    #[test]
    fn test_swap_exchanges_two_values() {
        let items = sample();
        let request = plan_swap(&items, 11, MoveDirection::Up).unwrap();
        assert_eq!(
            request.ordenes,
            vec![BannerOrder { id: 11, orden: 0 }, BannerOrder { id: 10, orden: 1 }]
        );

        // apply and check the ranking is still a permutation of the original
        let mut ranks: Vec<i32> = items
            .iter()
            .map(|b| {
                request
                    .ordenes
                    .iter()
                    .find(|o| Some(o.id) == b.id)
                    .map(|o| o.orden)
                    .unwrap_or(b.orden)
            })
            .collect();
        ranks.sort();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_down() {
        let request = plan_swap(&sample(), 11, MoveDirection::Down).unwrap();
        assert_eq!(
            request.ordenes,
            vec![BannerOrder { id: 11, orden: 2 }, BannerOrder { id: 12, orden: 1 }]
        );
    }

    /// Resource fake plus the ranking endpoint
    struct RankingApi {
        inner: Rc<FakeApi<Banner>>,
        sent: RefCell<Vec<ReorderRequest>>,
        fail: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl ResourceApi<Banner> for RankingApi {
        async fn list(&self) -> Result<Vec<Banner>, ApiError> {
            self.inner.list().await
        }

        async fn create(&self, payload: Payload) -> Result<(), ApiError> {
            self.inner.create(payload).await
        }

        async fn update(&self, id: EntityId, payload: Payload) -> Result<(), ApiError> {
            self.inner.update(id, payload).await
        }

        async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
            self.inner.delete(id).await
        }
    }

    #[async_trait(?Send)]
    impl RankApi for RankingApi {
        async fn reorder(&self, request: &ReorderRequest) -> Result<(), ApiError> {
            self.sent.borrow_mut().push(request.clone());
            if self.fail.get() {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    fn ranking_controller(
        fail: bool,
    ) -> (
        AdminController<Banner, RankingApi, Rc<RefCell<AdminState<Banner>>>, RecordingNotifier>,
        Rc<RankingApi>,
        RecordingNotifier,
    ) {
        let inner = FakeApi::with_items(sample());
        let api = Rc::new(RankingApi {
            inner: Rc::clone(&inner),
            sent: RefCell::new(Vec::new()),
            fail: Cell::new(fail),
        });
        let (plain, notifier) = controller(&inner);
        let ctrl = AdminController::new(Rc::clone(&api), plain.state().clone(), notifier.clone());
        block_on(ctrl.load());
        (ctrl, api, notifier)
    }

    #[test]
    fn test_reorder_sends_pair_and_reloads() {
        let (ctrl, api, _) = ranking_controller(false);
        assert!(block_on(ctrl.reorder(12, MoveDirection::Up)));

        assert_eq!(api.sent.borrow().len(), 1);
        assert_eq!(api.sent.borrow()[0].ordenes.len(), 2);
        let lists = api
            .inner
            .calls
            .borrow()
            .iter()
            .filter(|c| **c == Call::List)
            .count();
        assert_eq!(lists, 2);
    }

    #[test]
    fn test_reorder_at_boundary_sends_nothing() {
        let (ctrl, api, notifier) = ranking_controller(false);
        assert!(!block_on(ctrl.reorder(10, MoveDirection::Up)));
        assert!(api.sent.borrow().is_empty());
        assert!(notifier.kinds().is_empty());
    }

    #[test]
    fn test_reorder_failure_notifies() {
        let (ctrl, _, notifier) = ranking_controller(true);
        assert!(!block_on(ctrl.reorder(11, MoveDirection::Down)));
        assert_eq!(notifier.0.borrow()[0].1, REORDER_FAILED);
    }
}
