pub mod shared {
    pub mod core {
        pub mod api_key;
    }
    pub mod infrastructure {
        pub mod payload_buffer;
    }
}

pub mod modules {
    pub mod webhooks {
        pub mod core {
            pub mod errors;
            pub mod staleness;
            pub mod webhook_id;
        }
        pub mod use_cases {
            pub mod ingest_payload {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod read_payloads {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod auth;
                pub mod http_error;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures {
        pub mod app;
    }

    pub mod e2e {
        pub mod webhook_buffer_tests;
    }
}
