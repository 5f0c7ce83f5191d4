pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod timezone;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod notifications;
    }
}

pub mod modules {
    pub mod scheduling {
        pub mod core {
            pub mod policy;
            pub mod schedule_week;
            pub mod shift;
            pub mod user;
        }
        pub mod ports;
        pub mod adapters {
            pub mod outbound {
                pub mod scheduling_in_memory;
            }
        }
    }

    pub mod time_clock {
        pub mod core {
            pub mod decision;
            pub mod eligibility;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod reconciliation;
            pub mod state;
            pub mod worked_time;
        }
        pub mod ports;
        pub mod use_cases {
            pub mod application_error;
            pub mod clock_stream;

            pub mod clock_in {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod clock_out {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod review_overtime_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_clock_status {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_my_weekly_hours {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_pending_overtime_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_org_weekly_hours_comparison {
                pub mod csv_export;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod notification_dispatch;
                pub mod projections;
                pub mod projections_in_memory;
                pub mod projector;
            }
        }
    }

    pub mod overtime {
        pub mod core {
            pub mod hours;
            pub mod overtime;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod get_weekly_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
