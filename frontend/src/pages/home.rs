use crate::config;
use leptos::*;

/// Public entry view; also where the dashboard sends visitors without a session.
/// Signing in happens on the provider's page at the configured `sign_in_url`.
#[component]
pub fn HomePage() -> impl IntoView {
    let sign_in_url = config::sign_in_url();
    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl lg:text-6xl">
                        "LeaveDesk"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-gray-500 sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Employee leave requests and reporting"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                        <div class="rounded-md shadow">
                            <a href=sign_in_url class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 lg:py-4 lg:text-lg lg:px-10">
                                "Sign In"
                            </a>
                        </div>
                        <div class="mt-3 sm:mt-0">
                            <a href="/dashboard" class="w-full flex items-center justify-center px-8 py-3 border border-gray-300 text-base font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 lg:py-4 lg:text-lg lg:px-10">
                                "Open Dashboard"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
