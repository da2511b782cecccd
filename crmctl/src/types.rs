//! Common type definitions.
//!
//! All entity IDs are MySQL `INT UNSIGNED AUTO_INCREMENT` columns and are
//! represented as `u32` type aliases so signatures say which table they point at.

pub type CompanyId = u32;
pub type CustomerId = u32;
pub type DepartmentId = u32;
pub type EmployeeId = u32;

/// Convert the `last_insert_id` reported by MySQL into a table ID.
pub fn id_from_insert(last_insert_id: u64) -> anyhow::Result<u32> {
    u32::try_from(last_insert_id).map_err(|_| anyhow::anyhow!("generated id {last_insert_id} does not fit in an INT UNSIGNED column"))
}
