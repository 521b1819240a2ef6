//! # Admin Endpoints
//!
//! Dashboard overview, per-tab resource listing and admin mutations.
//! Image uploads are sent as `multipart/form-data`.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use shared::{
    Alert, DashboardStats, DiscountCode, FooterLink, ItemResponse, ListResponse, MarqueeText,
    Order, Product, ProductPayload, RecentOrders,
};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::domain::dashboard::{AdminAction, DashboardTab, ImageUpload, SliderForm, TabData};

#[tracing::instrument(skip(client))]
pub async fn get_dashboard_stats(client: &ApiClient) -> Result<DashboardStats> {
    let response: ItemResponse<DashboardStats> = client
        .send_json(
            client.request(Method::GET, "/admin/dashboard/stats"),
            "get_dashboard_stats",
        )
        .await?;
    Ok(response.into_inner())
}

#[tracing::instrument(skip(client))]
pub async fn get_recent_orders(client: &ApiClient) -> Result<Vec<Order>> {
    let response: RecentOrders = client
        .send_json(
            client.request(Method::GET, "/admin/dashboard/recent-orders"),
            "get_recent_orders",
        )
        .await?;
    Ok(response.orders)
}

#[tracing::instrument(skip(client))]
pub async fn get_alerts(client: &ApiClient) -> Result<Vec<Alert>> {
    list(client, "/admin/dashboard/alerts", "get_alerts").await
}

/// Load the rows of a resource tab. The overview is assembled by the caller
/// from the three dashboard endpoints.
#[tracing::instrument(skip(client))]
pub async fn load_tab(client: &ApiClient, tab: DashboardTab) -> Result<TabData> {
    let path = tab.resource_path().unwrap_or_default();

    let data = match tab {
        DashboardTab::Overview => {
            return Err(AppError::State(
                "The overview is loaded from the dashboard endpoints".to_string(),
            ))
        }
        DashboardTab::Products => TabData::Products(list(client, path, "list_products").await?),
        DashboardTab::Users => TabData::Users(list(client, path, "list_users").await?),
        DashboardTab::Sliders => TabData::Sliders(list(client, path, "list_sliders").await?),
        DashboardTab::HeroBanners => {
            TabData::HeroBanners(list(client, path, "list_hero_banners").await?)
        }
        DashboardTab::Marquee => TabData::Marquee(list(client, path, "list_marquee").await?),
        DashboardTab::FooterLinks => {
            TabData::FooterLinks(list(client, path, "list_footer_links").await?)
        }
        DashboardTab::DiscountCodes => {
            TabData::DiscountCodes(list(client, path, "list_discount_codes").await?)
        }
        DashboardTab::Investments => {
            TabData::Investments(list(client, path, "list_investments").await?)
        }
        DashboardTab::Payouts => TabData::Payouts(list(client, path, "list_payouts").await?),
        DashboardTab::Reports => TabData::Reports(list(client, path, "list_reports").await?),
        DashboardTab::ContactMessages => {
            TabData::ContactMessages(list(client, path, "list_contact_messages").await?)
        }
        DashboardTab::Companies => TabData::Companies(list(client, path, "list_companies").await?),
        DashboardTab::Orders => TabData::Orders(list(client, path, "list_admin_orders").await?),
    };

    tracing::debug!(rows = data.len(), "Tab loaded");
    Ok(data)
}

/// Execute an admin mutation.
#[tracing::instrument(skip(client, action), fields(action = action.name()))]
pub async fn perform(client: &ApiClient, action: AdminAction) -> Result<()> {
    match action {
        AdminAction::CreateProduct(payload) => create_product(client, &payload).await.map(|_| ()),
        AdminAction::UpdateProduct(id, payload) => {
            update_product(client, id, &payload).await.map(|_| ())
        }
        AdminAction::DeleteProduct(id) => delete(client, &format!("/admin/products/{}", id), "delete_product").await,
        AdminAction::UploadMainImage(id, image) => upload_main_image(client, id, &image).await,
        AdminAction::UploadSubImages(id, images) => upload_sub_images(client, id, &images).await,
        AdminAction::DeleteUser(id) => delete(client, &format!("/admin/users/{}", id), "delete_user").await,
        AdminAction::CreateSlider(form, image) => create_slider(client, &form, &image).await,
        AdminAction::DeleteSlider(id) => delete(client, &format!("/admin/sliders/{}", id), "delete_slider").await,
        AdminAction::DeleteHeroBanner(id) => {
            delete(client, &format!("/admin/hero-banners/{}", id), "delete_hero_banner").await
        }
        AdminAction::SaveMarquee(marquee) => save_marquee(client, &marquee).await,
        AdminAction::SaveFooterLink(link) => save_footer_link(client, &link).await,
        AdminAction::DeleteFooterLink(id) => {
            delete(client, &format!("/admin/footer-links/{}", id), "delete_footer_link").await
        }
        AdminAction::CreateDiscountCode(code) => create_discount_code(client, &code).await,
        AdminAction::DeleteDiscountCode(id) => {
            delete(client, &format!("/admin/discount-codes/{}", id), "delete_discount_code").await
        }
        AdminAction::MarkPayoutPaid(id) => {
            client
                .send_empty(
                    client.request(Method::POST, &format!("/admin/payouts/{}/mark-paid", id)),
                    "mark_payout_paid",
                )
                .await
        }
        AdminAction::MarkMessageRead(id) => {
            client
                .send_empty(
                    client.request(Method::POST, &format!("/admin/contact-messages/{}/read", id)),
                    "mark_message_read",
                )
                .await
        }
        AdminAction::DeleteContactMessage(id) => {
            delete(client, &format!("/admin/contact-messages/{}", id), "delete_contact_message").await
        }
    }
}

pub async fn create_product(client: &ApiClient, payload: &ProductPayload) -> Result<Product> {
    let response: ItemResponse<Product> = client
        .send_json(
            client.request(Method::POST, "/admin/products").json(payload),
            "create_product",
        )
        .await?;
    let product = response.into_inner();
    tracing::info!(product_id = product.id, "Product created");
    Ok(product)
}

pub async fn update_product(client: &ApiClient, product_id: i64, payload: &ProductPayload) -> Result<Product> {
    let response: ItemResponse<Product> = client
        .send_json(
            client
                .request(Method::PUT, &format!("/admin/products/{}", product_id))
                .json(payload),
            "update_product",
        )
        .await?;
    Ok(response.into_inner())
}

pub async fn upload_main_image(client: &ApiClient, product_id: i64, image: &ImageUpload) -> Result<()> {
    let form = Form::new().part("image", image_part(image)?);
    client
        .send_empty(
            client
                .request(Method::POST, &format!("/admin/products/{}/main-image", product_id))
                .multipart(form),
            "upload_main_image",
        )
        .await
}

pub async fn upload_sub_images(client: &ApiClient, product_id: i64, images: &[ImageUpload]) -> Result<()> {
    if images.is_empty() {
        return Err(AppError::Validation("No images selected".to_string()));
    }

    let mut form = Form::new();
    for image in images {
        form = form.part("images[]", image_part(image)?);
    }

    client
        .send_empty(
            client
                .request(Method::POST, &format!("/admin/products/{}/sub-images", product_id))
                .multipart(form),
            "upload_sub_images",
        )
        .await
}

pub async fn create_slider(client: &ApiClient, form: &SliderForm, image: &ImageUpload) -> Result<()> {
    let mut multipart = Form::new()
        .text("title_ar", form.title_ar.clone())
        .text("title_en", form.title_en.clone())
        .text("sort_order", form.sort_order.to_string())
        .part("image", image_part(image)?);
    if let Some(link) = form.link.clone().filter(|l| !l.is_empty()) {
        multipart = multipart.text("link", link);
    }

    client
        .send_empty(
            client.request(Method::POST, "/admin/sliders").multipart(multipart),
            "create_slider",
        )
        .await
}

/// Create the marquee text, or update it when it already has an id.
pub async fn save_marquee(client: &ApiClient, marquee: &MarqueeText) -> Result<()> {
    let request = match marquee.id {
        Some(id) => client.request(Method::PUT, &format!("/admin/marquee/{}", id)),
        None => client.request(Method::POST, "/admin/marquee"),
    };
    client.send_empty(request.json(marquee), "save_marquee").await
}

/// Create a footer link, or update it when it already has an id.
pub async fn save_footer_link(client: &ApiClient, link: &FooterLink) -> Result<()> {
    let request = match link.id {
        Some(id) => client.request(Method::PUT, &format!("/admin/footer-links/{}", id)),
        None => client.request(Method::POST, "/admin/footer-links"),
    };
    client.send_empty(request.json(link), "save_footer_link").await
}

pub async fn create_discount_code(client: &ApiClient, code: &DiscountCode) -> Result<()> {
    client
        .send_empty(
            client.request(Method::POST, "/admin/discount-codes").json(code),
            "create_discount_code",
        )
        .await
}

async fn list<T: DeserializeOwned>(client: &ApiClient, path: &str, operation: &'static str) -> Result<Vec<T>> {
    let response: ListResponse<T> = client
        .send_json(client.request(Method::GET, path), operation)
        .await?;
    Ok(response.into_vec())
}

async fn delete(client: &ApiClient, path: &str, operation: &'static str) -> Result<()> {
    client
        .send_empty(client.request(Method::DELETE, path), operation)
        .await
}

fn image_part(image: &ImageUpload) -> Result<Part> {
    Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(image.mime_type())
        .map_err(|e| AppError::Validation(format!("Invalid image type: {}", e)))
}
