pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod table;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod report_sink;
    }
}

pub mod modules {
    pub mod idle_time {
        pub mod core {
            pub mod aggregate;
            pub mod config;
            pub mod dominant;
            pub mod feedback;
            pub mod idle;
            pub mod record;
            pub mod shift;
        }
        pub mod use_cases {
            pub mod extract_idle_data {
                pub mod detail;
                pub mod extract;
                pub mod ingest;
            }
            pub mod create_summary {
                pub mod daily;
                pub mod handler;
                pub mod overall;
                pub mod summary;
                pub mod weekly;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod mean_idle_time {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod efficiency {
        pub mod core {
            pub mod average;
            pub mod config;
        }
        pub mod use_cases {
            pub mod employee_efficiency {
                pub mod report;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod operation_efficiency {
                pub mod report;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod item_efficiency {
                pub mod report;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
