//! Order history commands.
//!
//! # Usage
//!
//! ```bash
//! # Show every placed order, most recent first
//! ns-cli orders list
//!
//! # Dump the raw history as JSON
//! ns-cli orders list --json
//!
//! # Clear history (asks first unless --yes)
//! ns-cli orders clear
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATA_DIR` - Directory holding the storefront's durable store

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use ninetysix_storefront::shop::{Confirmation, OrderLog};
use ninetysix_storefront::storage::{FileStore, StorageError};
use thiserror::Error;

/// Errors that can occur during order commands.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// Store could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Terminal input or output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// History could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Open the order history kept in `data_dir`.
///
/// # Errors
///
/// Returns `OrdersError::Storage` if the directory cannot be created.
pub fn open(data_dir: &Path) -> Result<OrderLog, OrdersError> {
    tracing::debug!(data_dir = %data_dir.display(), "Opening store");
    let store = FileStore::open(data_dir)?;
    Ok(OrderLog::load(Arc::new(store)))
}

/// Write the order history to `out`.
///
/// # Errors
///
/// Returns `OrdersError` if writing fails.
pub fn list(log: &OrderLog, json: bool, out: &mut impl Write) -> Result<(), OrdersError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, log.orders())?;
        writeln!(out)?;
        return Ok(());
    }

    if log.is_empty() {
        writeln!(out, "No orders placed yet.")?;
        return Ok(());
    }

    for order in log.orders() {
        writeln!(out, "{}  {}", order.id, order.date)?;
        writeln!(
            out,
            "  {} | {} | {}",
            order.customer.name, order.customer.address, order.customer.phone
        )?;
        for item in &order.items {
            writeln!(out, "  - {} {}", item.name, item.price)?;
        }
        writeln!(out, "  Total: {}", order.total)?;
    }
    writeln!(out, "{} order(s)", log.len())?;
    Ok(())
}

/// Ask on `out` whether to clear history and read the answer from `input`.
///
/// Anything other than a yes answer declines, including end of input.
///
/// # Errors
///
/// Returns `io::Error` if the terminal cannot be read or written.
pub fn prompt(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Confirmation> {
    write!(out, "Are you sure you want to clear all order history? [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(Confirmation::from_answer(&answer))
}

/// Clear the order history if confirmed.
///
/// # Errors
///
/// Returns `OrdersError::Storage` if the stored history cannot be removed.
pub fn clear(
    log: &mut OrderLog,
    confirmation: Confirmation,
    out: &mut impl Write,
) -> Result<(), OrdersError> {
    let count = log.len();
    if log.clear_all(confirmation)? {
        tracing::info!(orders = count, "Order history cleared");
        writeln!(out, "Order history cleared! ({count} removed)")?;
    } else {
        writeln!(out, "Aborted; order history kept.")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use ninetysix_core::{Customer, Order, Price, Product, ProductId};

    use super::*;

    fn place_order(log: &mut OrderLog, millis: i64) {
        let items = vec![Product {
            id: ProductId::new(2),
            name: "Utility Cargo Pants".to_string(),
            price: Price::from_paise(399_900),
            image: None,
            placeholder: None,
        }];
        let customer = Customer {
            name: "Jane".to_string(),
            address: "1 Rd".to_string(),
            phone: "555".to_string(),
        };
        log.append(Order::from_cart(millis, customer, &items, Utc::now()))
            .unwrap();
    }

    fn output(write: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        write(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = open(dir.path()).unwrap();
        let text = output(|out| list(&log, false, out).unwrap());
        assert_eq!(text, "No orders placed yet.\n");
    }

    #[test]
    fn test_list_human_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = open(dir.path()).unwrap();
        place_order(&mut log, 1_700_000_000_000);

        let text = output(|out| list(&log, false, out).unwrap());
        assert!(text.starts_with("ORD-1700000000000"));
        assert!(text.contains("Jane | 1 Rd | 555"));
        assert!(text.contains("- Utility Cargo Pants ₹3999.00"));
        assert!(text.ends_with("1 order(s)\n"));

        let json = output(|out| list(&log, true, out).unwrap());
        let parsed: Vec<Order> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log.orders());
    }

    #[test]
    fn test_prompt_answers() {
        let mut sink = Vec::new();
        let yes = prompt(&mut "y\n".as_bytes(), &mut sink).unwrap();
        assert_eq!(yes, Confirmation::Confirmed);
        let eof = prompt(&mut "".as_bytes(), &mut sink).unwrap();
        assert_eq!(eof, Confirmation::Declined);
        assert!(String::from_utf8(sink).unwrap().contains("[y/N]"));
    }

    #[test]
    fn test_clear_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = open(dir.path()).unwrap();
        place_order(&mut log, 1);
        place_order(&mut log, 2);

        let text = output(|out| clear(&mut log, Confirmation::Declined, out).unwrap());
        assert!(text.contains("Aborted"));
        assert_eq!(open(dir.path()).unwrap().len(), 2);

        let text = output(|out| clear(&mut log, Confirmation::Confirmed, out).unwrap());
        assert!(text.contains("2 removed"));
        assert!(open(dir.path()).unwrap().is_empty());
    }
}
