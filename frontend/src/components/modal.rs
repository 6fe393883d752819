use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub onclose: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop, panel and close button shared by the feature overlays. Clicks
/// inside the panel do not reach the backdrop.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    let on_backdrop = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| onclose.emit(()))
    };
    let on_close_button = {
        let onclose = props.onclose.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            onclose.emit(());
        })
    };
    let keep_inside = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop} role="dialog" aria-modal="true">
            <div class={classes!("modal-panel", props.class.clone())} onclick={keep_inside}>
                <button class="modal-close" aria-label="Close" onclick={on_close_button}>{"✕"}</button>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
.modal-backdrop {
  position: fixed; inset: 0; z-index: 80; display: flex; align-items: flex-start; justify-content: center;
  padding: 48px 16px; overflow-y: auto; background: rgba(0, 0, 0, 0.8); backdrop-filter: blur(6px);
  animation: fade-in 0.2s ease;
}
.modal-panel {
  position: relative; width: 100%; max-width: 960px; border-radius: 24px;
  border: 1px solid var(--border); background: #0a0a0a; animation: rise 0.25s ease;
}
.modal-panel.modal-danger { border-color: rgba(239, 68, 68, 0.3); }
.modal-close {
  position: absolute; top: 16px; right: 16px; width: 36px; height: 36px; border-radius: 50%;
  border: 1px solid var(--border); background: none; cursor: pointer;
}
.modal-body { padding: 48px; display: flex; flex-direction: column; gap: 48px; }
.modal-intro { display: flex; flex-direction: column; align-items: flex-start; gap: 16px; }
@keyframes fade-in { from { opacity: 0; } }
@keyframes rise { from { opacity: 0; transform: translateY(16px); } }
"#}
            </style>
        </div>
    }
}
