// Turn time clock intents into notifications.
//
// Responsibilities
// - Resolve recipients (active ADMIN/MANAGER users, or the employee) and the
//   employee's display name through the user directory.
// - Deliver each notification independently. Lookup and delivery failures are
//   logged and swallowed; the decision that produced the intent already stands.

use crate::modules::scheduling::ports::UserDirectory;
use crate::modules::time_clock::core::events::v1::overtime_reviewed::OvertimeDecision;
use crate::modules::time_clock::core::intents::TimeClockIntent;
use crate::shared::infrastructure::notifications::{
    Notification, NotificationSink, NotificationType,
};

const RELATED_TYPE: &str = "TIME_ENTRY";

pub async fn dispatch_intents(
    directory: &dyn UserDirectory,
    sink: &dyn NotificationSink,
    intents: Vec<TimeClockIntent>,
) {
    for intent in intents {
        for notification in notifications_for(directory, intent).await {
            let user_id = notification.user_id.clone();
            if let Err(error) = sink.notify(notification).await {
                tracing::warn!(%user_id, %error, "notification delivery failed");
            }
        }
    }
}

async fn notifications_for(
    directory: &dyn UserDirectory,
    intent: TimeClockIntent,
) -> Vec<Notification> {
    match intent {
        TimeClockIntent::NotifyManagersOfLateClockIn {
            org_id,
            employee_id,
            time_entry_id,
            late_by_minutes,
        } => {
            let name = employee_name(directory, &org_id, &employee_id).await;
            to_managers(directory, &org_id, |manager_id| Notification {
                org_id: org_id.clone(),
                user_id: manager_id,
                title: format!("Late clock-in ({late_by_minutes}m)"),
                message: format!("{name} clocked in {late_by_minutes} minute(s) late."),
                notification_type: NotificationType::Warning,
                related_id: Some(time_entry_id.clone()),
                related_type: Some(RELATED_TYPE.to_string()),
            })
            .await
        }
        TimeClockIntent::NotifyManagersOfOvertime {
            org_id,
            employee_id,
            time_entry_id,
        } => {
            let name = employee_name(directory, &org_id, &employee_id).await;
            to_managers(directory, &org_id, |manager_id| Notification {
                org_id: org_id.clone(),
                user_id: manager_id,
                title: "Overtime Approval Needed".to_string(),
                message: format!("{name} clocked out after scheduled end and needs approval."),
                notification_type: NotificationType::OvertimeApproval,
                related_id: Some(time_entry_id.clone()),
                related_type: Some(RELATED_TYPE.to_string()),
            })
            .await
        }
        TimeClockIntent::NotifyEmployeeOfOvertimeReview {
            org_id,
            employee_id,
            time_entry_id,
            decision,
        } => {
            let (title, message, notification_type) = match decision {
                OvertimeDecision::Approve => (
                    "Overtime Approved",
                    "Your late clock-out time was approved.",
                    NotificationType::OvertimeApproved,
                ),
                OvertimeDecision::Deny => (
                    "Overtime Denied",
                    "Your late clock-out time was denied and adjusted to scheduled end time.",
                    NotificationType::OvertimeDenied,
                ),
            };
            vec![Notification {
                org_id,
                user_id: employee_id,
                title: title.to_string(),
                message: message.to_string(),
                notification_type,
                related_id: Some(time_entry_id),
                related_type: Some(RELATED_TYPE.to_string()),
            }]
        }
    }
}

async fn employee_name(directory: &dyn UserDirectory, org_id: &str, employee_id: &str) -> String {
    match directory.find_user(org_id, employee_id).await {
        Ok(Some(user)) => user.full_name(),
        Ok(None) => "An employee".to_string(),
        Err(error) => {
            tracing::warn!(%org_id, %employee_id, %error, "employee lookup failed");
            "An employee".to_string()
        }
    }
}

async fn to_managers(
    directory: &dyn UserDirectory,
    org_id: &str,
    build: impl Fn(String) -> Notification,
) -> Vec<Notification> {
    match directory.list_active_managers(org_id).await {
        Ok(managers) => managers.into_iter().map(|manager| build(manager.id)).collect(),
        Err(error) => {
            tracing::warn!(%org_id, %error, "manager lookup failed, skipping notifications");
            vec![]
        }
    }
}

#[cfg(test)]
mod notification_dispatch_tests {
    use super::*;
    use crate::modules::scheduling::adapters::outbound::scheduling_in_memory::InMemoryScheduling;
    use crate::modules::scheduling::core::user::UserRole;
    use crate::shared::infrastructure::notifications::in_memory::InMemoryNotificationSink;
    use crate::tests::fixtures::scheduling::make_user;
    use rstest::{fixture, rstest};

    #[fixture]
    fn directory() -> InMemoryScheduling {
        let mut directory = InMemoryScheduling::new();
        directory
            .add_user(make_user("emp-1", UserRole::Employee))
            .add_user(make_user("manager-1", UserRole::Manager))
            .add_user(make_user("admin-1", UserRole::Admin));
        directory
    }

    fn late(minutes: u32) -> TimeClockIntent {
        TimeClockIntent::NotifyManagersOfLateClockIn {
            org_id: "org-1".into(),
            employee_id: "emp-1".into(),
            time_entry_id: "te-1".into(),
            late_by_minutes: minutes,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_warn_every_manager_of_a_late_clock_in(directory: InMemoryScheduling) {
        let sink = InMemoryNotificationSink::new();
        dispatch_intents(&directory, &sink, vec![late(10)]).await;

        assert_eq!(sink.sent.lock().await.len(), 2);
        let to_manager = &sink.sent_to("manager-1").await[0];
        assert_eq!(to_manager.title, "Late clock-in (10m)");
        assert_eq!(to_manager.message, "Emp-1 Tester clocked in 10 minute(s) late.");
        assert_eq!(to_manager.notification_type, NotificationType::Warning);
        assert_eq!(to_manager.related_id.as_deref(), Some("te-1"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_notify_the_employee_of_a_denial(directory: InMemoryScheduling) {
        let sink = InMemoryNotificationSink::new();
        dispatch_intents(
            &directory,
            &sink,
            vec![TimeClockIntent::NotifyEmployeeOfOvertimeReview {
                org_id: "org-1".into(),
                employee_id: "emp-1".into(),
                time_entry_id: "te-1".into(),
                decision: OvertimeDecision::Deny,
            }],
        )
        .await;

        let sent = sink.sent_to("emp-1").await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Overtime Denied");
        assert_eq!(sent[0].notification_type, NotificationType::OvertimeDenied);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fall_back_to_a_generic_name_for_unknown_employees(
        directory: InMemoryScheduling,
    ) {
        let sink = InMemoryNotificationSink::new();
        dispatch_intents(
            &directory,
            &sink,
            vec![TimeClockIntent::NotifyManagersOfOvertime {
                org_id: "org-1".into(),
                employee_id: "ghost".into(),
                time_entry_id: "te-9".into(),
            }],
        )
        .await;
        let sent = sink.sent_to("admin-1").await;
        assert_eq!(
            sent[0].message,
            "An employee clocked out after scheduled end and needs approval."
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_swallow_delivery_and_lookup_failures(mut directory: InMemoryScheduling) {
        let mut sink = InMemoryNotificationSink::new();
        sink.toggle_offline();
        dispatch_intents(&directory, &sink, vec![late(3)]).await;
        assert!(sink.sent.lock().await.is_empty());

        directory.toggle_offline();
        sink.toggle_offline();
        dispatch_intents(&directory, &sink, vec![late(3)]).await;
        assert!(sink.sent.lock().await.is_empty());
    }
}
