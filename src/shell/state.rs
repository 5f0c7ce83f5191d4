use std::sync::Arc;

use crate::modules::overtime::use_cases::get_weekly_summary::handler::GetWeeklySummaryHandler;
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::time_clock::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::time_clock::use_cases::get_clock_status::handler::GetClockStatusHandler;
use crate::modules::time_clock::use_cases::get_my_weekly_hours::handler::GetMyWeeklyHoursHandler;
use crate::modules::time_clock::use_cases::get_org_weekly_hours_comparison::handler::GetOrgWeeklyHoursComparisonHandler;
use crate::modules::time_clock::use_cases::list_pending_overtime_requests::handler::ListPendingOvertimeRequestsHandler;
use crate::modules::time_clock::use_cases::review_overtime_request::handler::ReviewOvertimeRequestHandler;

#[derive(Clone)]
pub struct AppState {
    pub clock_status_handler: Arc<GetClockStatusHandler>,
    pub clock_in_handler: Arc<ClockInHandler>,
    pub clock_out_handler: Arc<ClockOutHandler>,
    pub review_overtime_handler: Arc<ReviewOvertimeRequestHandler>,
    pub pending_overtime_handler: Arc<ListPendingOvertimeRequestsHandler>,
    pub my_weekly_hours_handler: Arc<GetMyWeeklyHoursHandler>,
    pub hours_comparison_handler: Arc<GetOrgWeeklyHoursComparisonHandler>,
    pub weekly_summary_handler: Arc<GetWeeklySummaryHandler>,
}

impl AppState {
    pub fn new(ports: TimeClockPorts) -> Self {
        let weekly_summary_handler = Arc::new(GetWeeklySummaryHandler::new(
            ports.organizations.clone(),
            ports.weeks.clone(),
            ports.shifts.clone(),
            ports.queries.clone(),
            ports.clock.clone(),
        ));
        Self {
            clock_status_handler: Arc::new(GetClockStatusHandler::new(ports.clone())),
            clock_in_handler: Arc::new(ClockInHandler::new(ports.clone())),
            clock_out_handler: Arc::new(ClockOutHandler::new(ports.clone())),
            review_overtime_handler: Arc::new(ReviewOvertimeRequestHandler::new(ports.clone())),
            pending_overtime_handler: Arc::new(ListPendingOvertimeRequestsHandler::new(
                ports.clone(),
            )),
            my_weekly_hours_handler: Arc::new(GetMyWeeklyHoursHandler::new(ports.clone())),
            hours_comparison_handler: Arc::new(GetOrgWeeklyHoursComparisonHandler::new(ports)),
            weekly_summary_handler,
        }
    }
}
