/// Defines a struct whose sole purpose is wrapping an async [`Stream`],
/// mapping each item using a closure provided by the user.
///
/// # Example
/// Let's say we have a stream [`BoxStream`]`<'c, i32>`, but want to process
/// each `i32` item, turning it into e.g. `Result<u32, TryFromIntError>`.
///
/// This is possible by wrapping the stream in a custom struct, using the
/// [`pin_project_lite`] crate for pin projection of the wrapped stream,
/// then implementing [`Stream`] on the custom struct. *This is precisely
/// what this macro aims to simplify.*
///
/// ```rust,no_run
/// use std::num::TryFromIntError;
///
/// use futures_core::stream::BoxStream;
///
///
/// type OriginalStreamType<'c> = BoxStream<'c, i32>;
///
/// create_async_stream_wrapper!(
///     pub struct UnsignedIntStream<'c>;
///     transforms stream OriginalStreamType<'c> => stream of Result<u32, TryFromIntError>:
///         |value| value.map(u32::try_from)
/// );
/// ```
///
/// The generated struct has a crate-internal `new` method accepting the
/// original stream and implements [`Stream`] with the mapped item type.
///
///
/// [`Stream`]: futures_core::Stream
/// [`BoxStream`]: futures_core::BoxStream
macro_rules! create_async_stream_wrapper {
    (
        $struct_visibility:vis struct $struct_identifier:ident<$struct_lifetime:lifetime>;
        transforms stream $wrapped_type:ty => stream of $resulting_type:ty:
            |$captured_value:ident| $mapper:expr
    ) => {
        pin_project_lite::pin_project! {
            $struct_visibility struct $struct_identifier<$struct_lifetime> {
                #[pin]
                wrapped: $wrapped_type
            }
        }

        impl<$struct_lifetime> $struct_identifier<$struct_lifetime> {
            #[inline]
            fn new(wrapped: $wrapped_type) -> Self {
                Self { wrapped }
            }
        }

        impl<$struct_lifetime> futures_core::Stream for $struct_identifier<$struct_lifetime> {
            type Item = $resulting_type;

            fn poll_next(
                self: std::pin::Pin<&mut Self>,
                cx: &mut std::task::Context<'_>,
            ) -> std::task::Poll<Option<Self::Item>> {
                let this = self.project();

                match <$wrapped_type as futures_core::Stream>::poll_next(this.wrapped, cx) {
                    std::task::Poll::Ready($captured_value) => std::task::Poll::Ready($mapper),
                    std::task::Poll::Pending => std::task::Poll::Pending,
                }
            }
        }
    };
}
