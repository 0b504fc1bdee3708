//! Profiles sub-client — the mutation orchestrator.
//!
//! `set_profile_image` implements the canonical submission protocol:
//!
//! 1. Dispatcher path, if the profile has an active relay authorization.
//! 2. On a `RelayError`, the signature path with the nonce reserved at the
//!    start of the submission: typed data from the signing backend →
//!    wallet signature → relay broadcast.
//! 3. On a second `RelayError`, one direct contract call with the identical
//!    signed input. Terminal.
//!
//! Only the `RelayError` variant triggers a fallback, each exactly once.
//! Transport, signing, and contract errors propagate unchanged, and the
//! local nonce advances only after a confirmed success.

use crate::client::CanopyClient;
use crate::contract::{HubContract, SetProfileImageUriWithSigInput, SigParts};
use crate::domain::profile::{
    MutationReceipt, Profile, SubmissionPath, UpdateProfileImageRequest,
};
use crate::domain::relay::RelayResult;
use crate::error::{SdkError, SignError};
use crate::signing::TypedDataSigner;

pub struct Profiles<'a> {
    pub(crate) client: &'a CanopyClient,
}

impl<'a> Profiles<'a> {
    /// Update a profile's picture to `image_url`.
    ///
    /// `signer` and `contract` are the wallet and node seams supplied by the
    /// embedding application. Returns a receipt naming the path that carried
    /// the submission.
    pub async fn set_profile_image<S, C>(
        &self,
        profile: &Profile,
        image_url: &str,
        signer: &S,
        contract: &C,
    ) -> Result<MutationReceipt, SdkError>
    where
        S: TypedDataSigner,
        C: HubContract,
    {
        if profile.id.is_empty() {
            return Err(SdkError::Validation("Profile id is empty".to_string()));
        }
        if image_url.trim().is_empty() {
            return Err(SdkError::Validation("Image URL is empty".to_string()));
        }

        let _guard = self.client.session.begin_submission(&profile.id)?;
        let request = UpdateProfileImageRequest {
            profile_id: profile.id.clone(),
            url: image_url.to_string(),
        };
        // One reservation per submission; the fallback reuses it, and it is
        // confirmed or released exactly once below.
        let reservation = self.client.session.nonce.reserve().await;

        match self
            .dispatch(profile, &request, reservation.value(), signer, contract)
            .await
        {
            Ok(receipt) => {
                self.client.session.nonce.confirm(reservation).await;
                Ok(receipt)
            }
            Err(err) => {
                self.client.session.nonce.release(reservation).await;
                Err(err)
            }
        }
    }

    async fn dispatch<S, C>(
        &self,
        profile: &Profile,
        request: &UpdateProfileImageRequest,
        nonce: u64,
        signer: &S,
        contract: &C,
    ) -> Result<MutationReceipt, SdkError>
    where
        S: TypedDataSigner,
        C: HubContract,
    {
        if profile.can_use_relay() {
            match self
                .client
                .http
                .set_profile_image_via_dispatcher(request)
                .await?
            {
                RelayResult::RelayerResult(r) => Ok(MutationReceipt {
                    tx_hash: r.tx_hash,
                    tx_id: Some(r.tx_id),
                    path: SubmissionPath::Dispatcher,
                }),
                RelayResult::RelayError(err) => {
                    tracing::debug!(
                        profile = %request.profile_id,
                        reason = ?err.reason,
                        "Dispatcher declined; falling back to signature path"
                    );
                    self.submit_with_signature(request, nonce, signer, contract)
                        .await
                }
            }
        } else {
            self.submit_with_signature(request, nonce, signer, contract)
                .await
        }
    }

    /// Typed data → wallet signature → relay broadcast, with one direct
    /// contract call if the relay declines the broadcast.
    async fn submit_with_signature<S, C>(
        &self,
        request: &UpdateProfileImageRequest,
        nonce: u64,
        signer: &S,
        contract: &C,
    ) -> Result<MutationReceipt, SdkError>
    where
        S: TypedDataSigner,
        C: HubContract,
    {
        let created = self
            .client
            .http
            .create_set_profile_image_typed_data(request, nonce)
            .await?;
        let typed_data = created.typed_data;

        let signature = match tokio::time::timeout(
            self.client.sign_timeout,
            signer.sign_typed_data(&typed_data),
        )
        .await
        {
            Ok(signed) => signed?,
            Err(_) => return Err(SignError::Timeout.into()),
        };

        let components = signature.split()?;
        let input = SetProfileImageUriWithSigInput {
            profile_id: typed_data.value.profile_id.clone(),
            image_uri: typed_data.value.image_uri.clone(),
            sig: SigParts::new(&components, typed_data.value.deadline),
        };

        match self.client.http.broadcast(&created.id, &signature).await? {
            RelayResult::RelayerResult(r) => Ok(MutationReceipt {
                tx_hash: r.tx_hash,
                tx_id: Some(r.tx_id),
                path: SubmissionPath::Broadcast,
            }),
            RelayResult::RelayError(err) => {
                tracing::warn!(
                    profile = %request.profile_id,
                    reason = ?err.reason,
                    "Relay declined broadcast; invoking hub contract directly"
                );
                let tx_hash = contract.set_profile_image_uri_with_sig(&input).await?;
                Ok(MutationReceipt {
                    tx_hash,
                    tx_id: None,
                    path: SubmissionPath::DirectContract,
                })
            }
        }
    }
}
