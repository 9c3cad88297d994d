//! Demo records loaded at startup. Timestamps are relative to `now`.

use chrono::{DateTime, Duration, Utc};
use shared_types::{
    Booking, BookingId, BookingStatus, CaseFile, ChatMessage, FileCategory, LawyerProfile,
    Payment, PaymentStatus, Sender, Urgency,
};
use uuid::Uuid;

pub struct SeedData {
    pub profile: LawyerProfile,
    pub bookings: Vec<Booking>,
    pub payments: Vec<Payment>,
    pub case_files: Vec<CaseFile>,
    pub messages: Vec<ChatMessage>,
}

impl SeedData {
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            profile: profile(),
            bookings: bookings(now),
            payments: payments(now),
            case_files: case_files(now),
            messages: messages(now),
        }
    }
}

pub fn profile() -> LawyerProfile {
    LawyerProfile {
        id: "lawyer_001".into(),
        name: "Adv. Rajesh Sharma".into(),
        email: "rajesh.sharma@findmylawyer.com".into(),
        phone: "+91 9876543210".into(),
        specialization: "Criminal Law".into(),
        experience_years: 8,
        location: "New Delhi".into(),
        rating: 4.8,
        reviews: 127,
        languages: vec!["Hindi".into(), "English".into(), "Punjabi".into()],
        verified: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: u64,
    client_name: &str,
    case_type: &str,
    location: &str,
    language: &str,
    urgency: Urgency,
    description: &str,
    status: BookingStatus,
    created_at: DateTime<Utc>,
) -> Booking {
    Booking {
        id: BookingId(id),
        client_name: client_name.into(),
        case_type: case_type.into(),
        location: location.into(),
        language: language.into(),
        urgency,
        description: description.into(),
        status,
        created_at,
    }
}

pub fn bookings(now: DateTime<Utc>) -> Vec<Booking> {
    vec![
        booking(
            1,
            "Rajesh Kumar",
            "Family Law",
            "Mumbai, Maharashtra",
            "Hindi",
            Urgency::Moderate,
            "Need legal help for divorce proceedings",
            BookingStatus::Pending,
            now - Duration::hours(2),
        ),
        booking(
            2,
            "Priya Patel",
            "Corporate Law",
            "Bangalore, Karnataka",
            "English",
            Urgency::Urgent,
            "Contract review for business partnership",
            BookingStatus::Accepted,
            now - Duration::hours(5),
        ),
        booking(
            3,
            "Amit Singh",
            "Property Law",
            "Delhi, Delhi",
            "English",
            Urgency::Flexible,
            "Property dispute resolution",
            BookingStatus::Ongoing,
            now - Duration::days(1),
        ),
    ]
}

pub fn payments(now: DateTime<Utc>) -> Vec<Payment> {
    let payment = |id: &str, client: &str, rupees: u64, date, status, kind: &str| Payment {
        id: id.into(),
        client_name: client.into(),
        amount_paise: rupees * 100,
        date,
        status,
        kind: kind.into(),
        invoice_url: Some(format!("/invoices/{}.pdf", id)),
    };
    vec![
        payment("PAY001", "Rajesh Kumar", 1500, now - Duration::days(5), PaymentStatus::Completed, "Consultation"),
        payment("PAY002", "Priya Patel", 2000, now - Duration::days(15), PaymentStatus::Completed, "Video Call"),
        payment("PAY003", "Amit Singh", 1500, now, PaymentStatus::Pending, "Consultation"),
    ]
}

pub fn case_files(now: DateTime<Utc>) -> Vec<CaseFile> {
    let file = |name: &str, size_bytes, days_ago, category| CaseFile {
        id: Uuid::new_v4(),
        name: name.into(),
        size_bytes,
        uploaded_at: now - Duration::days(days_ago),
        kind: "PDF".into(),
        category,
    };
    vec![
        file("Property Deed - Final", 2_516_582, 2, FileCategory::Evidence),
        file("Statement of Witness", 1_258_291, 5, FileCategory::Statements),
        file("Court Notice - March 2026", 876_544, 10, FileCategory::CourtDocuments),
    ]
}

pub fn messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    let msg = |id, sender, text: &str, minutes_ago| ChatMessage {
        id,
        sender,
        text: text.into(),
        timestamp: now - Duration::minutes(minutes_ago),
    };
    vec![
        msg(1, Sender::Client, "Hello, I have a question about my case", 10),
        msg(2, Sender::Lawyer, "Hi! Sure, what would you like to know?", 9),
        msg(3, Sender::Client, "What are the next steps in my case?", 8),
        msg(4, Sender::Lawyer, "Based on the documents, we should file a petition next week.", 7),
    ]
}
