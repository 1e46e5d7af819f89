pub mod shared {
    pub mod infrastructure {
        pub mod writable;
    }
}

pub mod modules {
    pub mod name_tallies {
        pub mod core {
            pub mod record;
            pub mod store;
        }
        pub mod use_cases {
            pub mod append_name_tally {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_name_tallies {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod watch_name_tallies {
                pub mod stream;
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod log_observer;
            }
        }
    }
}

pub mod shell;
