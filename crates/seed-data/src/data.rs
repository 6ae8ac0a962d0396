//! The embedded placeholder dataset.
//!
//! Records carry fixed ids so reseeding targets the same rows every run;
//! the conflict-skip inserts in [`crate::db::Seeder`] then turn repeats
//! into no-ops.

use dashboard::models::InvoiceStatus;
use time::Date;
use time::macros::date;
use uuid::{Uuid, uuid};

const USER_ADMIN: Uuid = uuid!("9f8b1c2e-5a47-4c5e-9d3a-7e2f6b1c0d4e");

const CUSTOMER_AMARA_PATEL: Uuid = uuid!("c1a5f0e2-3b6d-4d2a-8f1e-5c7a9b3d0e21");
const CUSTOMER_BRUNO_KELLER: Uuid = uuid!("7d3b9e14-62af-4021-9c85-1f4e8a6b2d30");
const CUSTOMER_CAMILLE_DUPONT: Uuid = uuid!("e8f2a6c4-0d1b-4b7f-a952-3e6c8d0f1a47");
const CUSTOMER_DIEGO_MORALES: Uuid = uuid!("2a9c4e6f-8b1d-4f3a-b065-9d2e7c5a1f84");
const CUSTOMER_ELIF_DEMIR: Uuid = uuid!("5e0d7a92-c3f6-4e18-8b4a-6f1d9c2e7b53");
const CUSTOMER_FELIX_ANDERSSON: Uuid = uuid!("b4c8e2f6-1a5d-49c0-92e7-8d3f6a0b5c19");
const CUSTOMER_GRACE_MWANGI: Uuid = uuid!("08d6b3a1-e9c4-4a72-bd58-2f7e0c4a9d16");
const CUSTOMER_HIRO_TANAKA: Uuid = uuid!("93f1c7e5-2b8a-4d60-a3c9-e518f6d2b074");
const CUSTOMER_INES_OLIVEIRA: Uuid = uuid!("6c2e8f04-7d9b-4185-9e6a-0b3d5f8c2a91");
const CUSTOMER_JAKUB_NOWAK: Uuid = uuid!("d0a4b8c2-5e1f-4937-86d3-a9e7f2c50b68");

/// Login account seeded with a plaintext password; the seeder hashes it
/// before insertion.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone)]
pub struct SeedCustomer {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

/// Invoice record without an id; the database generates one on insert.
#[derive(Debug, Clone)]
pub struct SeedInvoice {
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Date,
}

#[derive(Debug, Clone)]
pub struct SeedRevenue {
    pub month: &'static str,
    pub revenue: i32,
}

/// The full dataset a seed run inserts, one collection per table.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub customers: Vec<SeedCustomer>,
    pub invoices: Vec<SeedInvoice>,
    pub revenue: Vec<SeedRevenue>,
}

impl SeedData {
    /// The canonical placeholder dataset embedded in the binary.
    pub fn placeholder() -> Self {
        Self {
            users: vec![SeedUser {
                id: USER_ADMIN,
                name: "Acme Admin",
                email: "admin@acme.dev",
                password: "123456",
            }],
            customers: vec![
                SeedCustomer {
                    id: CUSTOMER_AMARA_PATEL,
                    name: "Amara Patel",
                    email: "amara.patel@example.com",
                    image_url: "/customers/amara-patel.png",
                },
                SeedCustomer {
                    id: CUSTOMER_BRUNO_KELLER,
                    name: "Bruno Keller",
                    email: "bruno.keller@example.com",
                    image_url: "/customers/bruno-keller.png",
                },
                SeedCustomer {
                    id: CUSTOMER_CAMILLE_DUPONT,
                    name: "Camille Dupont",
                    email: "camille.dupont@example.com",
                    image_url: "/customers/camille-dupont.png",
                },
                SeedCustomer {
                    id: CUSTOMER_DIEGO_MORALES,
                    name: "Diego Morales",
                    email: "diego.morales@example.com",
                    image_url: "/customers/diego-morales.png",
                },
                SeedCustomer {
                    id: CUSTOMER_ELIF_DEMIR,
                    name: "Elif Demir",
                    email: "elif.demir@example.com",
                    image_url: "/customers/elif-demir.png",
                },
                SeedCustomer {
                    id: CUSTOMER_FELIX_ANDERSSON,
                    name: "Felix Andersson",
                    email: "felix.andersson@example.com",
                    image_url: "/customers/felix-andersson.png",
                },
                SeedCustomer {
                    id: CUSTOMER_GRACE_MWANGI,
                    name: "Grace Mwangi",
                    email: "grace.mwangi@example.com",
                    image_url: "/customers/grace-mwangi.png",
                },
                SeedCustomer {
                    id: CUSTOMER_HIRO_TANAKA,
                    name: "Hiro Tanaka",
                    email: "hiro.tanaka@example.com",
                    image_url: "/customers/hiro-tanaka.png",
                },
                SeedCustomer {
                    id: CUSTOMER_INES_OLIVEIRA,
                    name: "Ines Oliveira",
                    email: "ines.oliveira@example.com",
                    image_url: "/customers/ines-oliveira.png",
                },
                SeedCustomer {
                    id: CUSTOMER_JAKUB_NOWAK,
                    name: "Jakub Nowak",
                    email: "jakub.nowak@example.com",
                    image_url: "/customers/jakub-nowak.png",
                },
            ],
            invoices: vec![
                SeedInvoice {
                    customer_id: CUSTOMER_AMARA_PATEL,
                    amount: 15_795,
                    status: InvoiceStatus::Pending,
                    date: date!(2024 - 12 - 06),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_BRUNO_KELLER,
                    amount: 20_348,
                    status: InvoiceStatus::Pending,
                    date: date!(2024 - 11 - 14),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_ELIF_DEMIR,
                    amount: 3_040,
                    status: InvoiceStatus::Paid,
                    date: date!(2024 - 10 - 29),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_DIEGO_MORALES,
                    amount: 44_800,
                    status: InvoiceStatus::Paid,
                    date: date!(2024 - 09 - 10),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_ELIF_DEMIR,
                    amount: 34_577,
                    status: InvoiceStatus::Pending,
                    date: date!(2024 - 08 - 05),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_CAMILLE_DUPONT,
                    amount: 54_246,
                    status: InvoiceStatus::Pending,
                    date: date!(2024 - 07 - 16),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_AMARA_PATEL,
                    amount: 66_600,
                    status: InvoiceStatus::Pending,
                    date: date!(2024 - 06 - 27),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_FELIX_ANDERSSON,
                    amount: 32_545,
                    status: InvoiceStatus::Paid,
                    date: date!(2024 - 06 - 09),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_GRACE_MWANGI,
                    amount: 1_250,
                    status: InvoiceStatus::Paid,
                    date: date!(2024 - 06 - 17),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_HIRO_TANAKA,
                    amount: 8_546,
                    status: InvoiceStatus::Paid,
                    date: date!(2024 - 05 - 07),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_INES_OLIVEIRA,
                    amount: 50_000,
                    status: InvoiceStatus::Paid,
                    date: date!(2024 - 04 - 19),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_JAKUB_NOWAK,
                    amount: 77_246,
                    status: InvoiceStatus::Pending,
                    date: date!(2024 - 03 - 03),
                },
                SeedInvoice {
                    customer_id: CUSTOMER_DIEGO_MORALES,
                    amount: 8_945,
                    status: InvoiceStatus::Paid,
                    date: date!(2024 - 02 - 21),
                },
            ],
            revenue: vec![
                SeedRevenue { month: "Jan", revenue: 2_100 },
                SeedRevenue { month: "Feb", revenue: 1_800 },
                SeedRevenue { month: "Mar", revenue: 2_200 },
                SeedRevenue { month: "Apr", revenue: 2_600 },
                SeedRevenue { month: "May", revenue: 2_300 },
                SeedRevenue { month: "Jun", revenue: 3_100 },
                SeedRevenue { month: "Jul", revenue: 3_500 },
                SeedRevenue { month: "Aug", revenue: 3_700 },
                SeedRevenue { month: "Sep", revenue: 2_500 },
                SeedRevenue { month: "Oct", revenue: 2_900 },
                SeedRevenue { month: "Nov", revenue: 3_000 },
                SeedRevenue { month: "Dec", revenue: 4_600 },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invoices_reference_known_customers() {
        let data = SeedData::placeholder();
        let customer_ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();

        for invoice in &data.invoices {
            assert!(
                customer_ids.contains(&invoice.customer_id),
                "invoice dated {} references unknown customer {}",
                invoice.date,
                invoice.customer_id
            );
        }
    }

    #[test]
    fn test_customer_ids_and_emails_are_unique() {
        let data = SeedData::placeholder();

        let ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), data.customers.len());

        let emails: HashSet<_> = data.customers.iter().map(|c| c.email).collect();
        assert_eq!(emails.len(), data.customers.len());
    }

    #[test]
    fn test_user_emails_are_unique() {
        let data = SeedData::placeholder();
        let emails: HashSet<_> = data.users.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), data.users.len());
    }

    #[test]
    fn test_month_codes_fit_schema() {
        let data = SeedData::placeholder();
        assert_eq!(data.revenue.len(), 12);

        let months: HashSet<_> = data.revenue.iter().map(|r| r.month).collect();
        assert_eq!(months.len(), 12);

        for rev in &data.revenue {
            // month is the primary key, VARCHAR(4)
            assert!(rev.month.len() <= 4);
        }
    }

    #[test]
    fn test_amounts_are_positive() {
        let data = SeedData::placeholder();
        for invoice in &data.invoices {
            assert!(invoice.amount > 0);
        }
        for rev in &data.revenue {
            assert!(rev.revenue > 0);
        }
    }
}
