use dioxus::prelude::*;
use ui_types::Viewport;

/// Live window size, updated on resize. `None` until the first measurement.
pub fn use_viewport() -> Signal<Option<Viewport>> {
    let mut viewport = use_signal(|| None);

    use_future(move || async move {
        let mut listener = document::eval(
            r#"
            const send = () => dioxus.send([window.innerWidth, window.innerHeight]);
            send();
            window.addEventListener("resize", send);
            await new Promise(() => {});
            "#,
        );
        while let Ok((width, height)) = listener.recv::<(f64, f64)>().await {
            let next = Some(Viewport::new(width, height));
            if *viewport.peek() != next {
                viewport.set(next);
            }
        }
    });

    viewport
}
