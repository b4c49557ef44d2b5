use leptos::*;

use crate::outcome::truncate_hash;
use crate::services::wallet::BrowserWallet;

#[component]
pub fn Header(
    wallet_address: ReadSignal<Option<String>>,
    set_wallet_address: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (connect_error, set_connect_error) = create_signal(None::<String>);

    let on_wallet_click = move |_| {
        if wallet_address.get().is_none() {
            log::info!("🔑 Attempting to connect wallet...");

            spawn_local(async move {
                match BrowserWallet::connect().await {
                    Ok(account) => {
                        set_connect_error.set(None);
                        set_wallet_address.set(Some(account.address));
                    }
                    Err(e) => {
                        log::error!("❌ Wallet connection failed: {}", e);
                        set_connect_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <header class="header">
            <div class="header-left">
                <a href="#" class="logo">"PxlProof"</a>
            </div>
            <div class="header-right">
                <div
                    class="wallet-status"
                    class:connected=move || wallet_address.get().is_some()
                    on:click=on_wallet_click
                    style="cursor: pointer;"
                >
                    <span class="wallet-dot" class:connected=move || wallet_address.get().is_some()></span>
                    <span id="walletText">
                        {move || match wallet_address.get() {
                            Some(addr) => truncate_hash(&addr),
                            None => "Connect Wallet".to_string(),
                        }}
                    </span>
                </div>
                <Show
                    when=move || connect_error.get().is_some()
                    fallback=|| view! { }
                >
                    <div class="wallet-error">
                        {move || connect_error.get().unwrap_or_default()}
                    </div>
                </Show>
            </div>
        </header>
    }
}
