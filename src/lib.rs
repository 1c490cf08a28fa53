pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod builtin;
            pub mod catalog;
            pub mod event;
            pub mod lookups;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod filter;
            }
        }
    }
    pub mod registrations {
        pub mod core {
            pub mod draft;
            pub mod registration;
        }
        pub mod use_cases {
            pub mod register_for_event {
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
            pub mod browse_registrations {
                pub mod queries;
            }
            pub mod cancel_registration {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registration_store;
                pub mod registration_store_in_memory;
            }
        }
    }
}

pub mod shell;
