pub mod modules {
    pub mod registrations {
        pub mod core {
            pub mod ports;
            pub mod record;
            pub mod rules;
            pub mod state;
        }
        pub mod use_cases {
            pub mod register_citizen {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_registrations {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod release_registration {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registration_store_in_memory;
            }
        }
    }
}

pub mod shell;
