use std::collections::HashMap;

use crate::models::invoice::{EntityWithInvoices, OwnedInvoiceRow, RawInvoiceRow};

// ---
// Helper de junção: pendura as faturas em cada entidade dona
// ---
/// Mantém a ordem das entidades e, dentro de cada uma, a ordem das faturas.
/// Entidade sem fatura recebe lista vazia.
pub(crate) fn attach_invoices<T, F>(
    entities: Vec<T>,
    invoices: Vec<OwnedInvoiceRow>,
    id_of: F,
) -> Vec<EntityWithInvoices<T>>
where
    F: Fn(&T) -> i64,
{
    let mut by_owner: HashMap<i64, Vec<RawInvoiceRow>> = HashMap::new();
    for row in invoices {
        by_owner.entry(row.owner_id).or_default().push(RawInvoiceRow {
            status: row.status,
            amount: row.amount,
        });
    }

    entities
        .into_iter()
        .map(|entity| {
            let invoices = by_owner.remove(&id_of(&entity)).unwrap_or_default();
            EntityWithInvoices { entity, invoices }
        })
        .collect()
}
