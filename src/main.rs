use anyhow::Context;
use rust_decimal_macros::dec;

use order_service::config::{init_tracing, TelemetryConfig};
use order_service::{InMemoryOrderRepository, OrderId, OrderItem, OrderService};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, override with RUST_LOG or ORDER_SERVICE_LOG
    init_tracing(&TelemetryConfig::from_env());

    tracing::info!("🚀 Starting order service demo");

    // === 1. Composition root: one store, moved into the service ===
    let mut service = OrderService::new(InMemoryOrderRepository::new());

    // === 2. Create an order ===
    let order = service.create_order(vec![
        OrderItem::new("A", 2, dec!(5.00)),
        OrderItem::new("B", 1, dec!(3.50)),
    ])?;
    let order_id = order.id().clone();

    tracing::info!(order_id = %order_id, total = %order.total(), "📝 Order placed");

    // === 3. Cancel it: the record stays ===
    service.cancel_order(&order_id)?;

    let canceled = service
        .get_order(&order_id)
        .context("canceled order should still be stored")?;
    tracing::info!(order_id = %order_id, status = %canceled.status(), "Order after cancel");

    // === 4. A second cancel is rejected ===
    if let Err(e) = service.cancel_order(&order_id) {
        tracing::warn!(error = %e, "Second cancel refused as expected");
    }

    // === 5. Removal: unknown id is a no-op, known id is erased ===
    let removed_unknown = service.remove_order(&OrderId::new("zzz"));
    tracing::info!(removed = removed_unknown, "Remove of unknown order");

    let removed = service.remove_order(&order_id);
    tracing::info!(
        removed,
        still_stored = service.get_order(&order_id).is_some(),
        "Remove of canceled order"
    );

    tracing::info!(stored_orders = service.repository().len(), "🎉 Demo complete!");

    Ok(())
}
